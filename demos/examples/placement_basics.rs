// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Places the same content against one anchor for every anchor/transform origin pair,
//! then shows the clamp at each viewport edge.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_basics`

use kurbo::{Rect, Size};
use understory_placement::{Origin, Placement, PlacementOptions, compute_placement};

fn main() {
    let viewport = Size::new(1024.0, 768.0);
    let content = Size::new(80.0, 40.0);
    let anchor = Rect::new(100.0, 100.0, 120.0, 120.0);

    println!("== Origin pairs (anchor {anchor:?}) ==");
    for a in Origin::ALL {
        for t in Origin::ALL {
            let options = PlacementOptions::default()
                .with_anchor_origin(a)
                .with_transform_origin(t);
            let p = compute_placement(Some(anchor), Some(content), viewport, &options);
            let (a, t) = (a.to_string(), t.to_string());
            println!("  {a:>13} / {t:<13} -> {}", describe(&p));
        }
    }

    println!("== Edges ==");
    let options = PlacementOptions::default();
    for (label, anchor) in [
        ("top-left corner", Rect::new(0.0, -20.0, 20.0, 0.0)),
        ("right edge", Rect::new(1000.0, 300.0, 1020.0, 320.0)),
        ("bottom edge", Rect::new(500.0, 740.0, 520.0, 760.0)),
    ] {
        let p = compute_placement(Some(anchor), Some(content), viewport, &options);
        println!("  {label:<16} -> {}", describe(&p));
    }

    let corner = compute_placement(
        Some(Rect::new(0.0, -20.0, 20.0, 0.0)),
        Some(content),
        viewport,
        &options,
    );
    assert_eq!(
        corner,
        Placement {
            top: 16.0,
            left: 16.0,
            max_width: Some(992.0),
            max_height: Some(736.0),
        }
    );

    // Options can come from configuration.
    let from_config: PlacementOptions = serde_json::from_str(
        r#"{ "anchor_origin": { "vertical": "center", "horizontal": "right" }, "margin_threshold": 8.0 }"#,
    )
    .expect("valid options");
    let p = compute_placement(Some(anchor), Some(content), viewport, &from_config);
    println!("== From config ==\n  {}", describe(&p));
}

fn describe(p: &Placement) -> String {
    let dim = |d: Option<f64>| d.map_or_else(|| "none".to_string(), |d| format!("{d}"));
    format!(
        "top {:>6} left {:>6} max {} x {}",
        p.top,
        p.left,
        dim(p.max_width),
        dim(p.max_height)
    )
}
