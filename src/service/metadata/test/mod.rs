
use super::*;
use crate::model::command::CommandField;
use test_utils::{builder::MetadataDirBuilder, error::TestError, fixture};
