use infinite_carousel_adapter::mount_testimonials;

fn main() {
    // Example: mount into a named container with the built-in payload, then tear down.
    let host = |id: &str| matches!(id, "slidecontainer" | "nextslide" | "previousslide");

    if let Err(err) = mount_testimonials(&host, "missing", None) {
        println!("mount failed: {err}");
    }

    let Ok(mut m) = mount_testimonials(&host, "slidecontainer", None) else {
        return;
    };
    m.start();
    m.on_click("nextslide", 0);
    if let Some(view) = m.render() {
        println!(
            "transform={} transition={}",
            view.transform(),
            view.transition()
        );
        for card in view.visible_cards() {
            println!(
                "card {}: {} ({:?})",
                card.key,
                card.item.person,
                card.item.attribution()
            );
        }
    }
    m.tick(500);
    m.stop();
    println!("stopped, render={:?}", m.render().is_some());
}
