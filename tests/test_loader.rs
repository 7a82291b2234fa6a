use delicious_notes::{load_recipes, try_load_recipes, AppConfig, AssetBundle, LoadError};
use std::fs;
use tempfile::TempDir;

fn bundle_with(json: &str) -> (TempDir, AssetBundle) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recipes.json"), json).unwrap();
    let bundle = AssetBundle::directory(dir.path());
    (dir, bundle)
}

#[test]
fn test_loads_every_recipe_in_source_order() {
    let _ = env_logger::try_init();

    let (_dir, bundle) = bundle_with(
        r#"[
        {
            "name": "Tea",
            "image_url": "tea.png",
            "steps": [
                {"number": 1, "step": "Boil water", "ingredients": [{"id": 1, "name": "Water"}]},
                {"number": 2, "step": "Steep"}
            ]
        },
        {"name": "Toast", "image_url": "toast", "steps": [{"number": 7, "step": "Toast bread", "ingredients": []}]},
        {"name": "Soup", "image_url": "soup", "steps": []}
    ]"#,
    );

    let recipes = load_recipes(&bundle, &AppConfig::default());

    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].name, "Tea");
    assert_eq!(recipes[1].name, "Toast");
    assert_eq!(recipes[2].name, "Soup");

    let tea = &recipes[0];
    assert_eq!(tea.image_url, "tea.png");
    assert_eq!(tea.steps[0].number, 1);
    assert_eq!(tea.steps[0].step, "Boil water");
    assert_eq!(tea.steps[0].ingredients().len(), 1);
    assert_eq!(tea.steps[0].ingredients()[0].id, 1);
    assert_eq!(tea.steps[0].ingredients()[0].name, "Water");
    assert!(tea.steps[1].ingredients.is_none());

    assert_eq!(recipes[1].steps[0].number, 7);
    assert_eq!(recipes[1].steps[0].ingredients, Some(vec![]));
}

#[test]
fn test_steps_are_not_reordered() {
    let (_dir, bundle) = bundle_with(
        r#"[{"name": "Odd", "image_url": "odd", "steps": [
            {"number": 3, "step": "third"},
            {"number": 1, "step": "first"},
            {"number": 1, "step": "again"}
        ]}]"#,
    );

    let recipes = load_recipes(&bundle, &AppConfig::default());
    let numbers: Vec<i64> = recipes[0].steps.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![3, 1, 1]);
}

#[test]
fn test_missing_resource_yields_empty() {
    let _ = env_logger::try_init();

    let dir = TempDir::new().unwrap();
    let bundle = AssetBundle::directory(dir.path());

    assert!(load_recipes(&bundle, &AppConfig::default()).is_empty());
    assert!(matches!(
        try_load_recipes(&bundle, &AppConfig::default()),
        Err(LoadError::ResourceNotFound { name }) if name == "recipes.json"
    ));
}

#[test]
fn test_missing_directory_yields_empty() {
    let dir = TempDir::new().unwrap();
    let bundle = AssetBundle::directory(dir.path().join("nowhere"));
    assert!(load_recipes(&bundle, &AppConfig::default()).is_empty());
}

#[test]
fn test_malformed_json_yields_empty() {
    let cases = [
        // truncated array
        r#"[{"name": "Tea", "image_url": "tea", "steps": []"#,
        // wrong field type
        r#"[{"name": "Tea", "image_url": "tea", "steps": [{"number": "one", "step": "Boil"}]}]"#,
        // missing required field
        r#"[{"name": "Tea", "steps": []}]"#,
        // not an array
        r#"{"name": "Tea", "image_url": "tea", "steps": []}"#,
        "",
    ];

    for json in cases {
        let (_dir, bundle) = bundle_with(json);
        assert!(
            load_recipes(&bundle, &AppConfig::default()).is_empty(),
            "expected empty result for {json:?}"
        );
        assert!(matches!(
            try_load_recipes(&bundle, &AppConfig::default()),
            Err(LoadError::Decode(_))
        ));
    }
}

#[test]
fn test_empty_array_yields_empty() {
    let (_dir, bundle) = bundle_with("[]");
    let recipes = try_load_recipes(&bundle, &AppConfig::default()).unwrap();
    assert!(recipes.is_empty());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let (_dir, bundle) = bundle_with(
        r#"[{"name": "Tea", "image_url": "tea", "servings": 2, "steps": [{"number": 1, "step": "Boil", "minutes": 5}]}]"#,
    );
    let recipes = load_recipes(&bundle, &AppConfig::default());
    assert_eq!(recipes.len(), 1);
}

#[test]
fn test_custom_resource_name() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("menu.json"),
        r#"[{"name": "Tea", "image_url": "tea", "steps": []}]"#,
    )
    .unwrap();

    let config = AppConfig {
        resource_name: "menu".to_string(),
        ..AppConfig::default()
    };
    let recipes = load_recipes(&AssetBundle::directory(dir.path()), &config);
    assert_eq!(recipes.len(), 1);
}

#[test]
fn test_unreadable_resource_yields_empty() {
    let _ = env_logger::try_init();

    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("recipes.json")).unwrap();
    let bundle = AssetBundle::directory(dir.path());

    match try_load_recipes(&bundle, &AppConfig::default()) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, dir.path().join("recipes.json")),
        other => panic!("Expected an I/O error, got {other:?}"),
    }
    assert!(load_recipes(&bundle, &AppConfig::default()).is_empty());
}
