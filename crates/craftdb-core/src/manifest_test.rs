use std::path::Path;

use super::*;

fn group(category: &str, folders: &[&str]) -> FolderGroup {
    FolderGroup {
        category: Category::from(category),
        directory: "dokra".to_string(),
        default_subcategory: "Home Decor".to_string(),
        folders: folders.iter().map(|f| (*f).to_string()).collect(),
    }
}

fn manifest(groups: Vec<FolderGroup>) -> Manifest {
    Manifest {
        prices: PriceOverrides::default(),
        groups,
    }
}

#[test]
fn entries_flatten_groups_in_order() {
    let m = manifest(vec![
        group("Dokra Art", &["DOKRA OWL", "DOKRA HORSE"]),
        group("Wooden Craft", &["WOODEN KEY HOLDER"]),
    ]);
    let folders: Vec<&str> = m.entries().map(|e| e.folder).collect();
    assert_eq!(folders, vec!["DOKRA OWL", "DOKRA HORSE", "WOODEN KEY HOLDER"]);
    assert_eq!(m.folder_count(), 3);
    let last = m.entries().last().expect("expected an entry");
    assert_eq!(last.group.category, Category::WoodenCraft);
}

#[test]
fn validate_accepts_valid_manifest() {
    let m = manifest(vec![group("Dokra Art", &["DOKRA OWL", "DOKRA HORSE"])]);
    assert!(validate_manifest(&m).is_ok());
}

#[test]
fn validate_rejects_empty_directory() {
    let mut g = group("Dokra Art", &["DOKRA OWL"]);
    g.directory = "  ".to_string();
    let err = validate_manifest(&manifest(vec![g])).unwrap_err();
    assert!(err.to_string().contains("empty directory"));
}

#[test]
fn validate_rejects_empty_default_subcategory() {
    let mut g = group("Dokra Art", &["DOKRA OWL"]);
    g.default_subcategory = String::new();
    let err = validate_manifest(&manifest(vec![g])).unwrap_err();
    assert!(err.to_string().contains("default_subcategory"));
}

#[test]
fn validate_rejects_empty_folder_name() {
    let err = validate_manifest(&manifest(vec![group("Dokra Art", &[" _ "])])).unwrap_err();
    assert!(err.to_string().contains("empty folder name"));
}

#[test]
fn validate_rejects_folders_that_clean_to_the_same_name() {
    let m = manifest(vec![
        group("Dokra Art", &["DOKRA OWL"]),
        group("Wooden Craft", &["WOODEN_OWL"]),
    ]);
    let err = validate_manifest(&m).unwrap_err();
    assert!(err.to_string().contains("duplicate product folder"));
}

#[test]
fn validate_rejects_zero_prices() {
    let mut m = manifest(vec![group("Dokra Art", &["DOKRA OWL"])]);
    m.prices.categories.insert("Dokra Art".to_string(), 0);
    let err = validate_manifest(&m).unwrap_err();
    assert!(err.to_string().contains("Dokra Art"));
}

#[test]
fn price_overrides_layer_over_defaults() {
    let yaml = r"
prices:
  default: 1000
  categories:
    Dokra Art: 2700
groups: []
";
    let m: Manifest = serde_yaml::from_str(yaml).expect("valid manifest yaml");
    let table = m.price_table();
    assert_eq!(table.base_price(&Category::DokraArt), 2700);
    assert_eq!(table.base_price(&Category::WoodenCraft), 2000);
    assert_eq!(table.base_price(&Category::from("Cane")), 1000);
}

#[test]
fn missing_prices_section_uses_defaults() {
    let yaml = r"
groups:
  - category: Terracotta Items
    directory: terracotta
    default_subcategory: Pottery
    folders:
      - TERRACOTTA HORSE
";
    let m: Manifest = serde_yaml::from_str(yaml).expect("valid manifest yaml");
    assert_eq!(m.price_table(), crate::PriceTable::default());
    assert_eq!(m.groups[0].category, Category::TerracottaItems);
}

#[test]
fn load_manifest_reports_missing_file() {
    let err = load_manifest(Path::new("/nonexistent/folders.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::ManifestIo { .. }));
}

#[test]
fn load_manifest_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("folders.yaml");
    assert!(
        path.exists(),
        "folders.yaml missing at {path:?}; required for this test"
    );
    let result = load_manifest(&path);
    assert!(result.is_ok(), "failed to load folders.yaml: {result:?}");
    let m = result.unwrap();
    assert!(m.folder_count() > 0);
}
