use std::cell::Cell;

use infinite_carousel_adapter::{InlineCarousel, Rendered, Testimonial};

fn main() {
    // Example: an inline carousel whose data shows up a few host mutations after startup.
    //
    // A host would:
    // - forward DOM mutations until the data is found (`on_mutation`)
    // - forward resizes, clicks, and timer ticks
    // - draw whatever `render()` returns after each event
    let mutations = Cell::new(0u32);
    let source = || {
        mutations.set(mutations.get() + 1);
        (mutations.get() > 2).then(|| {
            vec![
                Testimonial::new("Ada", "Fast and reliable.").with_company("Acme"),
                Testimonial::new("Grace", "Saved us weeks.").with_job_title("CTO"),
                Testimonial::new("Linus", "It just works."),
            ]
        })
    };
    let host = |id: &str| matches!(id, "slideright" | "slideleft");
    let mut c = InlineCarousel::new(source, &host, Some(1280));

    while c.render().is_loading() {
        println!("loading testimonials...");
        c.on_mutation();
    }

    let mut now_ms = 0u64;
    for click in ["slideright", "slideright", "slideleft", "slideleft", "slideleft"] {
        c.on_click(click, now_ms);
        now_ms += 500;
        c.tick(now_ms);

        if let Rendered::Ready(view) = c.render() {
            let visible: Vec<&str> = view
                .visible_cards()
                .map(|card| card.item.person.as_str())
                .collect();
            println!(
                "{click}: transform={} visible={visible:?}",
                view.transform()
            );
        }
    }

    c.on_resize(480);
    println!("after resize: {:?}", c.controller().frame());
}
