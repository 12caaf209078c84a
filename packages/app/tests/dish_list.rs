use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use dishes::{Dish, DishFuture, DishList, DishListProps, DishSource, DishSourceHandle, FetchError};
use futures::channel::oneshot;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

type Reply = Result<Vec<Dish>, FetchError>;

/// A source whose single request resolves when the test says so.
struct ManualSource {
    reply: RefCell<Option<oneshot::Receiver<Reply>>>,
    requests: Rc<Cell<usize>>,
    dropped: Rc<Cell<bool>>,
}

struct SetOnDrop(Rc<Cell<bool>>);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl DishSource for ManualSource {
    fn fetch_dishes(&self) -> DishFuture {
        self.requests.set(self.requests.get() + 1);
        let reply = self.reply.borrow_mut().take().expect("only one request");
        let guard = SetOnDrop(self.dropped.clone());
        Box::pin(async move {
            let _guard = guard;
            reply.await.unwrap_or(Err(FetchError::Status(499)))
        })
    }
}

struct Harness {
    dom: VirtualDom,
    reply: oneshot::Sender<Reply>,
    requests: Rc<Cell<usize>>,
    dropped: Rc<Cell<bool>>,
}

fn mount() -> Harness {
    let (reply, rx) = oneshot::channel();
    let requests = Rc::new(Cell::new(0));
    let dropped = Rc::new(Cell::new(false));
    let source = DishSourceHandle::new(ManualSource {
        reply: RefCell::new(Some(rx)),
        requests: requests.clone(),
        dropped: dropped.clone(),
    });

    let mut dom = VirtualDom::new_with_props(DishList, DishListProps::builder().source(source).build());
    dom.rebuild_in_place();

    Harness {
        dom,
        reply,
        requests,
        dropped,
    }
}

/// Run pending tasks and renders until nothing happens for a little while.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(50)) => break,
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

fn taco() -> Dish {
    Dish {
        name: "Taco".into(),
        desc: "Crunchy".into(),
        ingredients: vec!["beef".into(), "cheese".into()],
    }
}

#[tokio::test]
async fn renders_nothing_while_pending() {
    let mut harness = mount();
    settle(&mut harness.dom).await;

    let html = dioxus_ssr::render(&harness.dom);
    assert!(!html.contains("<article"), "{html}");
    assert!(!html.contains("dish-error"), "{html}");
    assert_eq!(harness.requests.get(), 1);
}

#[tokio::test]
async fn renders_one_card_per_dish() {
    let mut harness = mount();
    settle(&mut harness.dom).await;

    harness.reply.send(Ok(vec![taco()])).unwrap();
    settle(&mut harness.dom).await;

    let html = dioxus_ssr::render(&harness.dom);
    assert_eq!(html.matches("<article").count(), 1, "{html}");
    assert!(html.contains("<h3>Taco</h3>"), "{html}");
    assert!(html.contains("<p>Crunchy</p>"), "{html}");
    assert_eq!(html.matches("<span>").count(), 2, "{html}");
    let beef = html.find("<span>beef</span>").expect("beef");
    let cheese = html.find("<span>cheese</span>").expect("cheese");
    assert!(beef < cheese);

    // resolved once, never asked again
    assert_eq!(harness.requests.get(), 1);
}

#[tokio::test]
async fn failure_leaves_the_list_empty() {
    let mut harness = mount();
    settle(&mut harness.dom).await;

    harness.reply.send(Err(FetchError::Status(500))).unwrap();
    settle(&mut harness.dom).await;

    let html = dioxus_ssr::render(&harness.dom);
    assert!(!html.contains("<article"), "{html}");
    assert!(html.contains("dish-error"), "{html}");
    assert!(html.contains("500"), "{html}");
    assert_eq!(harness.requests.get(), 1);
}

#[tokio::test]
async fn duplicate_names_are_reported() {
    let mut harness = mount();
    settle(&mut harness.dom).await;

    harness.reply.send(Ok(vec![taco(), taco()])).unwrap();
    settle(&mut harness.dom).await;

    let html = dioxus_ssr::render(&harness.dom);
    assert!(!html.contains("<article"), "{html}");
    assert!(html.contains("dish-error"), "{html}");
}

#[tokio::test]
async fn unmounting_cancels_the_request() {
    let mut harness = mount();
    settle(&mut harness.dom).await;
    assert!(!harness.dropped.get());

    drop(harness.dom);

    // the transport future is gone, so nobody is left to receive the reply
    assert!(harness.dropped.get());
    assert!(harness.reply.send(Ok(vec![taco()])).is_err());
}
