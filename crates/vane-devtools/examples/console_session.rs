//! Example: an interactive-style debugging session

use std::cell::RefCell;
use std::rc::Rc;

use vane_devtools::{
    controller_by_number, install_error_hook, log_contents, resolve_view, Console,
};
use vane_dom::DomTree;
use vane_sched::{JobError, Scheduler};
use vane_views::{Controller, Value, View, ViewFilter, ViewKind, ViewRegistry};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // A small application: a container view wrapping a list view
    let mut dom = DomTree::new();
    let app = dom.create_element("div");
    dom.set_attr(app, "id", "vane-0")?;
    dom.set_attr(app, "class", "vane-view")?;

    let list = dom.create_element("ul");
    dom.set_attr(list, "id", "vane-1")?;
    dom.set_attr(list, "class", "vane-view")?;
    dom.append_child(app, list)?;

    let row = dom.create_element("li");
    dom.append_child(list, row)?;

    let mut registry = ViewRegistry::new();
    registry.register(View::new(
        "vane-0",
        ViewKind::Container,
        Controller::new("app"),
    ));
    registry.register(
        View::new("vane-1", ViewKind::List, Controller::new("inbox")).with_content(Value::List(
            vec![Value::from("triage bugs"), Value::from("ship it")],
        )),
    );

    // "What view owns this row?"
    let view = resolve_view(&dom, &registry, row, ViewFilter::Any)?;
    println!("row belongs to #{} ({:?})", view.element_id(), view.kind());

    // "Show me what it is displaying"
    let mut console = Console::new();
    if let Some(Value::List(items)) = view.content() {
        log_contents(&mut console, items);
    }

    // Numeric shorthand, as typed at a debug prompt
    let controller = controller_by_number(&dom, &registry, 1)?;
    println!("controller: {}", controller.name());

    // Watch job failures while the app runs
    let console = Rc::new(RefCell::new(console));
    let mut scheduler = Scheduler::new();
    install_error_hook(&mut scheduler, Rc::clone(&console));
    scheduler.spawn(|| Err(JobError::with_stack("demo failure", "at example")));
    scheduler.run_until_idle();

    for entry in console.borrow().entries() {
        println!("[{:?}] {}", entry.level, entry.message);
    }

    Ok(())
}
