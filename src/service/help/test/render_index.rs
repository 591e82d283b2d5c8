use super::*;

/// Tests rendering the general index.
///
/// Verifies one block field per category, in declared order, each listing its
/// commands formatted and joined in declared order.
///
/// Expected: Ok with "Misc" then "Mod" sections
#[test]
fn renders_one_section_per_category() {
    let store = CommandMetadataStore::default();
    let registry = scenario_registry();

    let embed = HelpRenderer::new(&store, &registry)
        .render(None, &server_branding())
        .unwrap();

    assert_eq!(embed.title, "General help");
    assert_eq!(embed.fields.len(), 2);
    assert_eq!(embed.fields[0].name, "Misc");
    assert_eq!(embed.fields[0].value, "`/ping`, `/info`");
    assert_eq!(embed.fields[1].name, "Mod");
    assert_eq!(embed.fields[1].value, "`/kick`");
    assert!(embed.fields.iter().all(|f| !f.inline));
}

/// Tests that the index never touches the metadata store.
///
/// The store is empty, so any lookup would fail.
///
/// Expected: Ok despite no records being loaded
#[test]
fn does_not_require_metadata() {
    let store = CommandMetadataStore::default();
    let registry = CommandRegistry::default();

    let result = HelpRenderer::new(&store, &registry).render(None, &server_branding());

    assert!(result.is_ok());
}

/// Tests that every listed command appears exactly once in its own section.
///
/// Expected: Ok with each name occurring once across the index fields
#[test]
fn lists_every_command_exactly_once() {
    let store = CommandMetadataStore::default();
    let registry = CommandRegistry::default();

    let embed = HelpRenderer::new(&store, &registry)
        .render(None, &server_branding())
        .unwrap();

    for (category, field) in registry.categories().iter().zip(&embed.fields) {
        assert_eq!(field.name, category.label);
        let listed: Vec<&str> = field.value.split(", ").collect();
        let expected: Vec<String> = category
            .commands
            .iter()
            .map(|name| format_command_name(name))
            .collect();
        assert_eq!(listed, expected);
    }

    let all_values: String = embed
        .fields
        .iter()
        .map(|f| f.value.as_str())
        .collect::<Vec<_>>()
        .join("|");
    for name in registry.help_topics() {
        assert_eq!(all_values.matches(&format_command_name(name)).count(), 1);
    }
}

/// Tests the header and introduction of the index.
///
/// Expected: Ok with "Help" author carrying the server icon and the notation text
#[test]
fn carries_help_author_and_notation() {
    let store = CommandMetadataStore::default();
    let registry = scenario_registry();

    let embed = HelpRenderer::new(&store, &registry)
        .render(None, &server_branding())
        .unwrap();

    let author = embed.author.unwrap();
    assert_eq!(author.name, "Help");
    assert_eq!(author.icon_url.as_deref(), Some(ICON_URL));
    assert_eq!(embed.colour, colour::MAGENTA);
    let description = embed.description.unwrap();
    assert!(description.contains("[parameters] denoted like this are optional."));
    assert!(description.contains("/help topic:<topic>"));
}

/// Tests rendering for a server without an icon.
///
/// Expected: Ok with an author header that has no icon
#[test]
fn renders_without_server_icon() {
    let store = CommandMetadataStore::default();
    let registry = scenario_registry();

    let embed = HelpRenderer::new(&store, &registry)
        .render(None, &Branding::new("No Icon", None))
        .unwrap();

    assert_eq!(embed.author.unwrap().icon_url, None);
}
