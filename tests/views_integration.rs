//! End-to-end checks across dataset loading and the three views

use std::io::Write;

use waterwatch::views::{critical_count, critical_names, report_rows};
use waterwatch::{
    BarChartLayout, Config, Dataset, DatasetError, MapLayer, RiskLevel, Shell, View,
};

const CUSTOM_DATASET: &str = r#"
[[water_body]]
id = 10
name = "Hauz Khas Lake"
pollution_level = 45
water_level = 40
risk = "Medium"
lat = 28.5535
lng = 77.1926
affected = "Migratory birds"
radius = 800

[[water_body]]
id = 11
name = "Najafgarh Drain"
pollution_level = 95
water_level = 35
risk = "High"
lat = 28.6090
lng = 76.9855
affected = "Groundwater, Farmland"
radius = 7500

[[water_body]]
id = 12
name = "Sanjay Van Pond"
pollution_level = 12.5
water_level = 80
risk = "Low"
lat = 28.5270
lng = 77.1680
affected = "None reported"
radius = 0
"#;

fn write_dataset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_custom_dataset_file() {
    let file = write_dataset(CUSTOM_DATASET);
    let dataset = Dataset::load(file.path()).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(critical_count(dataset.bodies()), 1);
    assert_eq!(
        critical_names(dataset.bodies()).collect::<Vec<_>>(),
        vec!["Najafgarh Drain"]
    );
}

#[test]
fn test_all_views_agree_on_order() {
    let file = write_dataset(CUSTOM_DATASET);
    let dataset = Dataset::load(file.path()).unwrap();
    let config = Config::default();
    let bodies = dataset.bodies();

    let report_ids: Vec<_> = report_rows(bodies).map(|r| r.id).collect();
    let map_ids: Vec<_> = MapLayer::from_bodies(bodies, &config.map)
        .markers
        .iter()
        .map(|m| m.body_id)
        .collect();
    assert_eq!(report_ids, vec![10, 11, 12]);
    assert_eq!(map_ids, report_ids);

    let names: Vec<String> = bodies.iter().map(|b| b.name.clone()).collect();
    let series = waterwatch::views::status_series(bodies, &config.chart);
    let layout = BarChartLayout::new(&names, &series, 640.0, 320.0);
    let label_text: Vec<_> = layout.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(label_text, vec!["Hauz Khas Lake", "Najafgarh Drain", "Sanjay Van Pond"]);
    assert_eq!(layout.y_max, 100.0);
}

#[test]
fn test_zone_radius_for_custom_bodies() {
    let dataset = Dataset::from_toml_str(CUSTOM_DATASET).unwrap();
    let layer = MapLayer::from_bodies(dataset.bodies(), &Config::default().map);

    let radii: Vec<_> = layer.markers.iter().map(|m| m.zone.radius).collect();
    assert_eq!(radii, vec![8.0, 75.0, 0.0]);
}

#[test]
fn test_invalid_risk_in_file_is_rejected() {
    let file = write_dataset(&CUSTOM_DATASET.replace("\"Medium\"", "\"Moderate\""));

    match Dataset::load(file.path()) {
        Err(DatasetError::UnknownRisk { id, label }) => {
            assert_eq!(id, 10);
            assert_eq!(label, "Moderate");
        }
        other => panic!("expected unknown risk error, got {other:?}"),
    }
}

#[test]
fn test_missing_dataset_file() {
    let err = Dataset::load(std::path::Path::new("/nonexistent/bodies.toml")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn test_shell_switches_between_views() {
    let dataset = Dataset::seed();
    let mut shell = Shell::new();

    for view in [View::Reports, View::Map, View::Dashboard] {
        shell.select_view(view);
    }

    assert_eq!(shell.active(), View::Dashboard);
    assert_eq!(shell.visible().collect::<Vec<_>>(), vec![View::Dashboard]);
    // View switching never touches the data
    assert_eq!(dataset.iter().filter(|b| b.risk == RiskLevel::High).count(), 2);
}
