// Copyright 2026 the Dendry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A terminal walkthrough of the Dendry editing core: builds a small map,
//! edits and reorders it, round-trips both persisted grammars, splices a
//! canned "AI" reply, and lays out the legacy canvas variant.

use dendry_canvas::{CanvasTree, LayoutMetrics};
use dendry_codec::adapters::canvas as bullet;
use dendry_editor::{Editor, SaveFormat};
use dendry_focus::visible_spine;
use dendry_tree::NodePath;

fn main() {
    let mut editor = Editor::new("Trip planning");
    let packing = editor.add_child(&NodePath::root(), "Packing").unwrap();
    editor.add_child(&packing, "Tent").unwrap();
    editor.add_child(&packing, "Stove").unwrap();
    let food = editor.add_child(&NodePath::root(), "Food").unwrap();

    // Reorder: food first.
    let food = editor.move_up(&food).unwrap();
    editor.select(&food).unwrap();

    println!("outline export:\n{}\n", editor.export(SaveFormat::Outline).unwrap());
    println!("selected: {}", editor.selection());
    println!(
        "visible spine: {:?}",
        visible_spine(editor.tree())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );
    println!("suggested name: {}\n", editor.suggested_file_name(SaveFormat::Json));

    // Splice a canned model reply under "Food".
    let reply = "Camping meals\n\tBreakfast\n\t\tOatmeal\n\tDinner\n\t\tChili";
    let target = editor.selection().clone();
    let added = editor.splice_reply(&target, reply).unwrap();
    println!("spliced {added} generated topics:");
    println!("{}\n", editor.export(SaveFormat::Outline).unwrap());

    // Copy a subtree and restore it onto a fresh map via the root paste rule.
    let fragment = editor.copy_at(&food).unwrap();
    let mut restored = Editor::new("placeholder");
    restored.paste_at(&NodePath::root(), &fragment).unwrap();
    println!("restored root after paste: {}\n", restored.tree().root().text);

    // JSON round trip.
    let json = editor.export(SaveFormat::Json).unwrap();
    let mut reloaded = Editor::new("placeholder");
    reloaded.import(&json, SaveFormat::Json).unwrap();
    assert_eq!(reloaded.tree(), editor.tree());
    println!("json round trip ok ({} nodes)\n", reloaded.node_count());

    // The legacy canvas flavor: bullet-list persistence plus a layout pass.
    let mut canvas = CanvasTree::new("Trip planning");
    let gear = canvas.insert(canvas.root(), "Gear").unwrap();
    canvas.insert(gear, "Tent").unwrap();
    canvas.set_expanded(gear, false);
    canvas.layout(&LayoutMetrics::default());

    let bullets = bullet::encode(&canvas);
    println!("bullet export:\n{bullets}");
    let decoded = bullet::decode(&bullets).unwrap();
    println!(
        "bullet round trip ok ({} nodes, {} visible)",
        decoded.node_count(),
        decoded.visible_count()
    );
}
