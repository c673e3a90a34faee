// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session.
//!
//! Draws hotspots over a 800x600 image, builds content under them, renames a
//! few items, and removes one with a confirmation prompt answered on stdin
//! (any answer starting with `y` confirms; no input confirms).
//!
//! Run:
//! - `cargo run -p hotspot_demos --example draw_and_edit`
//! - `RUST_LOG=trace cargo run -p hotspot_demos --example draw_and_edit` to see pointer moves

use std::io::{self, BufRead, Write};

use hotspot_demos::{init_tracing, render_list, render_overlays};
use hotspot_editor::{Editor, EditorOptions, Removal};
use hotspot_geometry::ClampMode;
use kurbo::{Point, Rect};

fn ask(prompt: &str) -> bool {
    print!("{prompt} [Y/n] ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!("y");
            true
        }
        Ok(_) => !line.trim_start().to_lowercase().starts_with('n'),
    }
}

fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) -> Option<usize> {
    editor.pointer_down(Point::new(from.0, from.1));
    let steps = 4;
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        if let Some(ghost) = editor.pointer_move(Point::new(x, y)) {
            println!("  ghost: {:?}", ghost.to_rect());
        }
    }
    editor.pointer_up()
}

fn main() {
    init_tracing();

    let surface = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut editor = Editor::new(EditorOptions::new(surface).with_clamp(ClampMode::Clamp));
    editor.set_image("living-room.jpg");

    println!("Image: {}", editor.image().unwrap_or("<none>"));
    print!("{}", render_list(&editor));

    println!("\nDrawing the sofa (down-right drag):");
    let Some(sofa) = drag(&mut editor, (80.0, 300.0), (400.0, 480.0)) else {
        return;
    };
    println!("\nDrawing the lamp (up-left drag, ending off the image):");
    let Some(lamp) = drag(&mut editor, (700.0, 200.0), (620.0, -40.0)) else {
        return;
    };

    // Rename the sofa through a title field.
    if let Some(id) = editor.begin_title_edit([sofa]) {
        editor.edit_title(id, "Sofa");
        editor.blur(id);
    }

    // Sofa: one section with two sub-sections.
    if let Some(section) = editor.add_child([sofa]) {
        if let Some(fabric) = editor.add_child(section) {
            editor.add_heading(fabric);
            editor.add_product(fabric);
        }
        if let Some(finish) = editor.add_child(section)
            && let Some(product) = editor.add_product(finish)
        {
            editor.begin_title_edit(product);
            editor.edit_title(product, "Walnut legs");
            editor.blur(product);
        }
    }

    // Lamp: products only. Adding a section afterwards is rejected.
    editor.add_product([lamp]);
    editor.add_product([lamp]);
    let actions = editor.actions([lamp]);
    println!("\nLamp actions: {actions:?}");
    editor.add_child([lamp]);

    editor.hover_enter(lamp);
    editor.toggle_collapsed([sofa, 0, 1]);

    println!("\nList:");
    print!("{}", render_list(&editor));
    println!("\nOverlays:");
    print!("{}", render_overlays(&editor));

    println!();
    match editor.remove([sofa, 0], &mut ask) {
        Removal::Removed { count } => println!("Removed {count} nodes."),
        Removal::Cancelled => println!("Kept the section."),
        Removal::Stale => println!("Nothing to remove."),
    }

    println!("\nList:");
    print!("{}", render_list(&editor));
}
