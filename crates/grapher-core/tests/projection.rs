// File: crates/grapher-core/tests/projection.rs
// Purpose: Projection filtering, delta transform, axis labels, scale flag and colors.

use grapher_core::table::parse;
use grapher_core::{
    colors_for, project, project_with, LogScalePolicy, Projection, ProjectionOptions, ScaleKind, Table, ViewState, YScale,
};

fn table() -> Table {
    parse(
        "\
id,name,lat,long,3/1/20,3/2/20,3/3/20,3/4/20
,Alpha,0,0,1,3,3,10
,Beta,0,0,0,5,4,4
,Gamma,0,0,2,2,2,2
",
    )
    .expect("parse")
}

#[test]
fn selection_order_drives_series_and_colors() {
    let t = table();
    let p = project(&t, &ViewState::new(["Gamma", "World Total", "Alpha"], YScale::Linear));
    let names: Vec<&str> = p.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "World Total", "Alpha"]);
    let colors: Vec<_> = p.series.iter().map(|s| s.color).collect();
    assert_eq!(colors, colors_for(3));
    assert_eq!(p.series_named("World Total").unwrap().values, vec![3, 10, 9, 16]);
}

#[test]
fn labels_cover_every_day_regardless_of_selection() {
    let t = table();
    let expected = vec!["2020-03-01", "2020-03-02", "2020-03-03", "2020-03-04"];
    assert_eq!(project(&t, &ViewState::new(["Alpha"], YScale::Linear)).labels, expected);
    assert_eq!(project(&t, &ViewState::new(Vec::<String>::new(), YScale::Linear)).labels, expected);
}

#[test]
fn delta_mode_takes_first_differences() {
    let t = table();
    let p = project(&t, &ViewState::new(["Alpha", "Beta"], YScale::Delta));
    assert_eq!(p.series[0].values, vec![0, 2, 0, 7]);
    assert_eq!(p.series[1].values, vec![0, 5, -1, 0]);
    assert_eq!(p.axis_labels.x, "Date");
    assert_eq!(p.axis_labels.y, "Cases (Change)");
    assert_eq!(p.scale, ScaleKind::Linear);
}

#[test]
fn delta_matches_raw_series_definition() {
    let t = table();
    for name in t.entities() {
        let raw = &t.get(name).unwrap().values;
        let p = project(&t, &ViewState::new([name.as_str()], YScale::Delta));
        let values = &p.series[0].values;
        assert_eq!(values[0], 0);
        for k in 1..raw.len() {
            assert_eq!(values[k], raw[k] - raw[k - 1], "{name} day {k}");
        }
    }
}

#[test]
fn delta_of_extreme_swings_saturates() {
    let t = parse("id,name,lat,long,1/1/20,1/2/20,1/3/20\n,Swing,0,0,-9223372036854775807,9223372036854775807,-9223372036854775807\n")
        .expect("parse");
    let p = project(&t, &ViewState::new(["Swing"], YScale::Delta));
    assert_eq!(p.series[0].values, vec![0, i64::MAX, i64::MIN]);
}

#[test]
fn linear_and_log_axis_labels() {
    let t = table();
    let lin = project(&t, &ViewState::default());
    assert_eq!(lin.axis_labels.y, "Cases");
    assert_eq!(lin.scale, ScaleKind::Linear);
    let log = project(&t, &ViewState::default().with_yscale(YScale::Log));
    assert_eq!(log.axis_labels.y, "Cases");
    assert_eq!(log.scale, ScaleKind::Logarithmic);
}

#[test]
fn log_flag_is_forwarded_even_with_zero_values() {
    let t = table();
    // Beta starts at 0, which a log axis cannot show; the flag is still forwarded.
    let p = project(&t, &ViewState::new(["Beta"], YScale::Log));
    assert_eq!(p.scale, ScaleKind::Logarithmic);
    assert_eq!(p.series[0].values, vec![0, 5, 4, 4]);
}

#[test]
fn linear_fallback_policy_for_non_positive_log_values() {
    let t = table();
    let opts = ProjectionOptions { log_scale_policy: LogScalePolicy::LinearWhenNonPositive };
    let with_zero = project_with(&t, &ViewState::new(["Beta"], YScale::Log), &opts);
    assert_eq!(with_zero.scale, ScaleKind::Linear);
    let positive = project_with(&t, &ViewState::new(["Gamma"], YScale::Log), &opts);
    assert_eq!(positive.scale, ScaleKind::Logarithmic);
}

#[test]
fn unknown_entities_are_dropped_without_error() {
    let t = table();
    let p = project(&t, &ViewState::new(["Atlantis", "Alpha", "Lemuria"], YScale::Linear));
    assert_eq!(p.series.len(), 1);
    assert_eq!(p.series[0].name, "Alpha");
    // First surviving series gets the first color.
    assert_eq!(p.series[0].color, colors_for(1)[0]);
    assert_eq!(p.dropped, vec!["Atlantis", "Lemuria"]);
    assert!(p.series_named("Atlantis").is_none());
}

#[test]
fn repeated_names_project_once() {
    let t = table();
    let p = project(&t, &ViewState::new(["Alpha", "Beta", "Alpha"], YScale::Linear));
    let names: Vec<&str> = p.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[test]
fn projection_leaves_inputs_untouched() {
    let t = table();
    let state = ViewState::new(["Alpha"], YScale::Delta);
    let before_state = state.clone();
    let before_alpha = t.get("Alpha").unwrap().clone();
    let _ = project(&t, &state);
    assert_eq!(state, before_state);
    assert_eq!(t.get("Alpha").unwrap(), &before_alpha);
}

#[test]
fn json_uses_renderer_field_names() {
    let t = table();
    let json = project(&t, &ViewState::new(["Gamma"], YScale::Delta)).to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["axisLabels"]["y"], "Cases (Change)");
    assert_eq!(v["scale"], "linear");
    assert_eq!(v["series"][0]["color"], "#ff0000");
    assert_eq!(v["series"][0]["values"], serde_json::json!([0, 0, 0, 0]));
    assert!(v.get("dropped").is_none());
}

#[test]
fn json_round_trips_without_dropped_names() {
    let t = table();
    let p = project(&t, &ViewState::new(["Alpha", "Nowhere"], YScale::Log));
    let json: serde_json::Result<String> = p.to_json();
    let back: Projection = serde_json::from_str(&json.unwrap()).unwrap();
    assert_eq!(back.series, p.series);
    assert_eq!(back.scale, ScaleKind::Logarithmic);
    assert!(back.dropped.is_empty());
}
