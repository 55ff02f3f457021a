use std::sync::{Arc, Mutex};

use barkit::chart::geometry;
use barkit::chart::hooks::ValueLabelFn;
use barkit::svg::{Fill, Node, Rect, TextAnchor};
use barkit::{BarChart, ChartConfig, ChartData, Dataset, RenderHooks};

fn sample_data() -> ChartData {
    ChartData::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![Dataset::new(vec![5.0, 15.0, 30.0])],
    )
}

fn bars_only_config() -> ChartConfig {
    let mut config = ChartConfig::new(400.0, 100.0);
    config.with_inner_lines = false;
    config.with_horizontal_labels = false;
    config.with_vertical_labels = false;
    config.show_bar_tops = false;
    config
}

#[test]
fn bar_hook_is_called_once_per_point_with_builtin_geometry() {
    let seen: Arc<Mutex<Vec<(usize, f64, f64, f64)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let hooks = RenderHooks::new().bar(move |ctx: &barkit::chart::hooks::BarContext<'_>| {
        sink.lock().unwrap().push((
            ctx.index,
            ctx.bar_height,
            ctx.base_height,
            ctx.bar_width,
        ));
        // Replace the bar with a plain marker rect.
        Node::Rect(Rect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            rx: None,
            ry: None,
            fill: Fill::None,
        })
    });

    let config = bars_only_config();
    let doc = BarChart::new(config.clone())
        .with_hooks(hooks)
        .render(&sample_data())
        .unwrap();

    let data = [5.0, 15.0, 30.0];
    let calls = seen.lock().unwrap();
    assert_eq!(calls.len(), 3);
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.0, i);
        let expected = geometry::calc_height(data[i], &data, config.height, false);
        assert!((call.1 - expected).abs() < 1e-9);
        let base = geometry::calc_base_height(&data, config.height, false);
        assert!((call.2 - base).abs() < 1e-9);
        assert_eq!(call.3, geometry::bar_width(1.0));
    }

    // The hook's output entirely replaces the built-in rects.
    match &doc.children[2] {
        Node::Group(bars) => {
            assert_eq!(bars.len(), 3);
            for bar in bars {
                assert_eq!(
                    bar,
                    &Node::Rect(Rect {
                        x: 0.0,
                        y: 0.0,
                        width: 1.0,
                        height: 1.0,
                        rx: None,
                        ry: None,
                        fill: Fill::None,
                    })
                );
            }
        }
        other => panic!("expected bar group, got {other:?}"),
    }
}

#[test]
fn bar_hook_sees_comparison_series_geometry() {
    let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let hooks = RenderHooks::new().bar(move |ctx: &barkit::chart::hooks::BarContext<'_>| {
        sink.lock().unwrap().push(ctx.bar_height2);
        Node::Group(Vec::new())
    });

    // Second dataset shorter than the first: the tail falls back to the
    // primary series index-by-index.
    let data = ChartData::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            Dataset::new(vec![5.0, 15.0, 30.0]),
            Dataset::new(vec![10.0, 20.0]),
        ],
    );
    let config = bars_only_config();
    BarChart::new(config.clone())
        .with_hooks(hooks)
        .render(&data)
        .unwrap();

    let comparison = [10.0, 20.0, 30.0];
    let calls = seen.lock().unwrap();
    assert_eq!(calls.len(), 3);
    for (i, &height2) in calls.iter().enumerate() {
        let expected =
            geometry::calc_height(comparison[i], &comparison, config.height, false);
        assert!((height2 - expected).abs() < 1e-9);
    }
}

#[test]
fn grid_hook_replaces_the_grid_group() {
    let hooks = RenderHooks::new()
        .grid_lines(|ctx: &barkit::chart::hooks::GridLinesContext| {
            assert_eq!(ctx.count, 4);
            vec![Node::Group(Vec::new())]
        });
    let mut config = bars_only_config();
    config.with_inner_lines = true;
    let doc = BarChart::new(config)
        .with_hooks(hooks)
        .render(&sample_data())
        .unwrap();
    // Grid renders after defs and background.
    assert_eq!(doc.children[2], Node::Group(vec![Node::Group(Vec::new())]));
}

#[test]
fn value_label_hook_replaces_texts() {
    let hooks =
        RenderHooks::new().value_label(ValueLabelFn(|ctx: &barkit::chart::hooks::BarTopContext<'_>| {
            Node::Text(barkit::svg::Text {
                x: 0.0,
                y: 0.0,
                content: format!("#{}", ctx.index),
                fill: ctx.color,
                font_size: 10.0,
                anchor: TextAnchor::Start,
                rotation: 0.0,
            })
        }));
    let mut config = bars_only_config();
    config.show_values_on_top_of_bars = true;
    let doc = BarChart::new(config)
        .with_hooks(hooks)
        .render(&sample_data())
        .unwrap();
    match &doc.children[3] {
        Node::Group(labels) => {
            let texts: Vec<&str> = labels
                .iter()
                .map(|n| match n {
                    Node::Text(t) => t.content.as_str(),
                    other => panic!("expected text, got {other:?}"),
                })
                .collect();
            assert_eq!(texts, ["#0", "#1", "#2"]);
        }
        other => panic!("expected value label group, got {other:?}"),
    }
}
