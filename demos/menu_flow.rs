//! Walkthrough of the public API against the in-memory host: shape a paged
//! menu, build and register it, then simulate a click session.
//!
//! Run with `cargo run --example menu_flow`.

use menugrid::{
    Container, ContainerEvent, ContainerKind, Content, EventRouter, IdentityKey, MemoryHost,
    Registry, ShapeGrid, SubjectId,
};

fn main() -> Result<(), menugrid::Error> {
    let mut host = MemoryHost::new();
    let registry = Registry::shared();

    // A bordered 3-row menu: glass panes around the edge, two buttons in the
    // middle row.
    let mut shape = ShapeGrid::new(3)?;
    shape.set_row("ggggggggg", 1)?;
    shape.set_row("ggg-b-g-c-gg", 2)?;
    shape.set_row("ggggggggg", 3)?;
    shape.map_letter('g', Content::new("glass_pane"))?;
    shape.map_letter('b', Content::new("confirm_button"))?;
    shape.map_letter('c', Content::new("cancel_button"))?;

    let mut menu = Container::new(ContainerKind::Grid, IdentityKey::new("demo", "main_menu"));
    menu.set_title("Main Menu");
    menu.on_open(|_| println!("menu opened"));
    menu.on_click(|event| {
        if let ContainerEvent::Click { slot, .. } = event {
            println!("clicked slot {slot}");
        }
    });
    menu.on_close(|_| println!("menu closed"));
    menu.attach_shape(shape)?;
    menu.build(&mut host, None)?;

    let handle = menu.live().expect("just built");
    let shared = menu.register(&mut registry.lock().unwrap());

    let player = SubjectId::new(1);
    shared.lock().unwrap().open(&mut host, player)?;

    // What a host adapter would do when raw events arrive.
    let router = EventRouter::new(registry);
    router.dispatch(&ContainerEvent::Open {
        container: handle,
        subject: player,
    });
    router.dispatch(&ContainerEvent::Click {
        container: handle,
        clicked: Some(handle),
        slot: 12,
        subject: player,
    });
    router.dispatch(&ContainerEvent::Close {
        container: handle,
        subject: player,
    });

    shared.lock().unwrap().close(&mut host)?;
    Ok(())
}
