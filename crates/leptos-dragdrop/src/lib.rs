//! Leptos DragDrop Utilities
//!
//! Typed drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! `provide_dnd` installs the document listeners and the context; `use_drag`
//! and `use_drop` register sources and targets beneath it.

pub mod monitor;

use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use monitor::{exceeds_threshold, ActiveDrag, DragKind, DragMonitor, SourceId, TargetId};

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Provider options
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DndOptions {
    /// Pointer travel (px) before a press becomes a drag
    pub threshold_px: i32,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self { threshold_px: DRAG_THRESHOLD_PX }
    }
}

/// DnD state shared with every source and target under the provider
pub struct DndContext<T: Send + Sync + 'static> {
    monitor: RwSignal<DragMonitor<T>>,
    /// Item factories, called when a press turns into a drag
    factories: StoredValue<HashMap<SourceId, Callback<(), T>>>,
    /// Drop callbacks per target
    handlers: StoredValue<HashMap<TargetId, Callback<T>>>,
}

impl<T: Send + Sync + 'static> Clone for DndContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndContext<T> {}

impl<T: Clone + Send + Sync + 'static> DndContext<T> {
    fn new() -> Self {
        Self {
            monitor: RwSignal::new(DragMonitor::new()),
            factories: StoredValue::new(HashMap::new()),
            handlers: StoredValue::new(HashMap::new()),
        }
    }

    fn press(&self, source: SourceId, kind: DragKind, x: i32, y: i32) {
        self.monitor.update_untracked(|m| m.press(source, kind, x, y));
    }

    /// Pointer moved to (`x`, `y`). `primary_held` is false when the button
    /// went up somewhere we never saw a mouseup, e.g. outside the window.
    fn on_pointer_move(&self, x: i32, y: i32, primary_held: bool, threshold: i32) {
        if !primary_held {
            let (pending, active) = self.monitor.with_untracked(|m| (m.is_pending(), m.is_active()));
            if active {
                self.monitor.update(|m| m.cancel());
                log::debug!("[DND] drag abandoned, button released elsewhere");
            } else if pending {
                self.monitor.update_untracked(|m| m.cancel());
            }
            return;
        }

        let starting = self.monitor.with_untracked(|m| m.motion(x, y, threshold));
        let Some(source) = starting else { return };

        let factory = self.factories.with_value(|f| f.get(&source).cloned());
        let Some(factory) = factory else { return };

        let item = factory.run(());
        self.monitor.update(|m| {
            m.begin(item);
        });
        log::debug!("[DND] drag started");
    }

    fn on_mouseup(&self) {
        let idle = self.monitor.with_untracked(|m| !m.is_active());
        let dropped = self.monitor.try_update(|m| m.release()).flatten();
        if idle {
            return;
        }

        match dropped {
            Some((target, item)) => {
                let handler = self.handlers.with_value(|h| h.get(&target).cloned());
                if let Some(handler) = handler {
                    log::debug!("[DND] dropped on {:?}", target);
                    handler.run(item);
                }
            }
            None => log::debug!("[DND] released outside any target"),
        }
    }
}

/// Install the drag backend and provide its context to all children.
/// Call once, in a component that wraps every draggable and droppable.
pub fn provide_dnd<T>(options: DndOptions) -> DndContext<T>
where
    T: Clone + Send + Sync + 'static,
{
    let ctx = DndContext::<T>::new();
    bind_document_listeners(ctx, options);
    provide_context(ctx);
    ctx
}

/// Document-level mousemove/mouseup: translate pointer events to drag semantics
fn bind_document_listeners<T>(ctx: DndContext<T>, options: DndOptions)
where
    T: Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let threshold = options.threshold_px;
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        ctx.on_pointer_move(ev.client_x(), ev.client_y(), ev.buttons() & 1 != 0, threshold);
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        ctx.on_mouseup();
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// A registered drag source
pub struct DragSource<T: Send + Sync + 'static> {
    /// True while this source's item is being dragged
    pub is_dragging: Signal<bool>,
    binding: Option<(DndContext<T>, SourceId, DragKind)>,
}

impl<T: Send + Sync + 'static> Clone for DragSource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DragSource<T> {}

impl<T: Clone + Send + Sync + 'static> DragSource<T> {
    /// Mousedown handler for the source element. Records a pending drag;
    /// the drag itself starts once the pointer moves past the threshold.
    pub fn on_mousedown(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        let binding = self.binding;
        move |ev: web_sys::MouseEvent| {
            let Some((ctx, source, kind)) = binding else { return };
            if ev.button() != 0 {
                return;
            }
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ctx.press(source, kind, ev.client_x(), ev.client_y());
        }
    }
}

/// Register the current component as a drag source of `kind`.
/// `item` builds the payload when the drag begins.
pub fn use_drag<T, F>(kind: DragKind, item: F) -> DragSource<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    let Some(ctx) = use_context::<DndContext<T>>() else {
        log::warn!("[DND] use_drag({kind}) without provide_dnd; source is inert");
        return DragSource { is_dragging: Signal::stored(false), binding: None };
    };

    let source = ctx.monitor.try_update_untracked(|m| m.register_source());
    let Some(source) = source else {
        return DragSource { is_dragging: Signal::stored(false), binding: None };
    };
    ctx.factories.update_value(|f| {
        f.insert(source, Callback::new(move |_: ()| item()));
    });
    on_cleanup(move || {
        ctx.factories.update_value(|f| {
            f.remove(&source);
        });
    });

    let monitor = ctx.monitor;
    let is_dragging = Memo::new(move |_| monitor.with(|m| m.is_dragging(source)));

    DragSource {
        is_dragging: is_dragging.into(),
        binding: Some((ctx, source, kind)),
    }
}

/// A registered drop target
pub struct DropTarget<T: Send + Sync + 'static> {
    /// A drag is hovering over this target
    pub is_over: Signal<bool>,
    /// The drag in progress is of a kind this target accepts
    pub can_drop: Signal<bool>,
    binding: Option<(DndContext<T>, TargetId)>,
}

impl<T: Send + Sync + 'static> Clone for DropTarget<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DropTarget<T> {}

impl<T: Clone + Send + Sync + 'static> DropTarget<T> {
    pub fn on_mouseenter(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        let binding = self.binding;
        move |_ev: web_sys::MouseEvent| {
            let Some((ctx, target)) = binding else { return };
            // Hover only shows while dragging; skip notifying otherwise
            if ctx.monitor.with_untracked(|m| m.is_active()) {
                ctx.monitor.update(|m| m.enter(target));
            } else {
                ctx.monitor.update_untracked(|m| m.enter(target));
            }
        }
    }

    pub fn on_mouseleave(&self) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
        let binding = self.binding;
        move |_ev: web_sys::MouseEvent| {
            let Some((ctx, target)) = binding else { return };
            if ctx.monitor.with_untracked(|m| m.is_over(target)) {
                ctx.monitor.update(|m| m.leave(target));
            } else {
                ctx.monitor.update_untracked(|m| m.leave(target));
            }
        }
    }
}

/// Register the current component as a drop target accepting `accept`.
/// `on_drop` runs once per drop released over this target.
pub fn use_drop<T>(accept: &[DragKind], on_drop: Callback<T>) -> DropTarget<T>
where
    T: Clone + Send + Sync + 'static,
{
    let Some(ctx) = use_context::<DndContext<T>>() else {
        log::warn!("[DND] use_drop({accept:?}) without provide_dnd; target is inert");
        return DropTarget {
            is_over: Signal::stored(false),
            can_drop: Signal::stored(false),
            binding: None,
        };
    };

    let target = ctx.monitor.try_update_untracked(|m| m.register_target(accept));
    let Some(target) = target else {
        return DropTarget {
            is_over: Signal::stored(false),
            can_drop: Signal::stored(false),
            binding: None,
        };
    };
    ctx.handlers.update_value(|h| {
        h.insert(target, on_drop);
    });
    on_cleanup(move || {
        ctx.monitor.update(|m| m.unregister_target(target));
        ctx.handlers.update_value(|h| {
            h.remove(&target);
        });
    });

    let monitor = ctx.monitor;
    let is_over = Memo::new(move |_| monitor.with(|m| m.is_over(target)));
    let can_drop = Memo::new(move |_| monitor.with(|m| m.can_drop(target)));

    DropTarget {
        is_over: is_over.into(),
        can_drop: can_drop.into(),
        binding: Some((ctx, target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const BOX: DragKind = "box";

    /// Context plus one source and one target, with every drop recorded
    fn board() -> (DndContext<String>, DragSource<String>, DropTarget<String>, Arc<Mutex<Vec<String>>>) {
        let ctx = DndContext::<String>::new();
        provide_context(ctx);

        let dropped = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&dropped);
        let target = use_drop(&[BOX], Callback::new(move |item: String| {
            sink.lock().unwrap().push(item);
        }));
        let source = use_drag(BOX, || String::from("Field 1!"));
        (ctx, source, target, dropped)
    }

    fn ids(source: &DragSource<String>, target: &DropTarget<String>) -> (SourceId, TargetId) {
        let (_, sid, _) = source.binding.unwrap();
        let (_, tid) = target.binding.unwrap();
        (sid, tid)
    }

    #[test]
    fn test_drop_runs_callback_once() {
        Owner::new().with(|| {
            let (ctx, source, target, dropped) = board();
            let (sid, tid) = ids(&source, &target);

            ctx.press(sid, BOX, 10, 10);
            ctx.on_pointer_move(30, 10, true, DRAG_THRESHOLD_PX);
            assert!(source.is_dragging.get_untracked());
            ctx.monitor.update(|m| m.enter(tid));
            assert!(target.is_over.get_untracked());
            assert!(target.can_drop.get_untracked());

            ctx.on_mouseup();
            ctx.on_mouseup();
            assert_eq!(*dropped.lock().unwrap(), vec![String::from("Field 1!")]);
            assert!(!source.is_dragging.get_untracked());
        });
    }

    #[test]
    fn test_release_off_target_runs_nothing() {
        Owner::new().with(|| {
            let (ctx, source, target, dropped) = board();
            let (sid, tid) = ids(&source, &target);

            ctx.press(sid, BOX, 0, 0);
            ctx.on_pointer_move(0, 40, true, DRAG_THRESHOLD_PX);
            ctx.monitor.update(|m| m.enter(tid));
            ctx.monitor.update(|m| m.leave(tid));
            ctx.on_mouseup();

            assert!(dropped.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_factory_runs_only_when_drag_starts() {
        Owner::new().with(|| {
            let ctx = DndContext::<u32>::new();
            provide_context(ctx);
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let source = use_drag(BOX, move || counter.fetch_add(1, Ordering::SeqCst) as u32);
            let (_, sid, _) = source.binding.unwrap();

            ctx.press(sid, BOX, 0, 0);
            ctx.on_pointer_move(2, 2, true, DRAG_THRESHOLD_PX);
            assert_eq!(calls.load(Ordering::SeqCst), 0);

            ctx.on_pointer_move(20, 2, true, DRAG_THRESHOLD_PX);
            ctx.on_pointer_move(40, 2, true, DRAG_THRESHOLD_PX);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_button_released_elsewhere_clears_press() {
        Owner::new().with(|| {
            let (ctx, source, target, dropped) = board();
            let (sid, tid) = ids(&source, &target);

            // Press, then the button comes up outside the window
            ctx.press(sid, BOX, 0, 0);
            ctx.on_pointer_move(1, 1, false, DRAG_THRESHOLD_PX);
            ctx.on_pointer_move(50, 50, true, DRAG_THRESHOLD_PX);
            assert!(!source.is_dragging.get_untracked());

            // Same for a drag already under way
            ctx.press(sid, BOX, 0, 0);
            ctx.on_pointer_move(50, 0, true, DRAG_THRESHOLD_PX);
            ctx.monitor.update(|m| m.enter(tid));
            ctx.on_pointer_move(60, 0, false, DRAG_THRESHOLD_PX);
            assert!(!source.is_dragging.get_untracked());
            ctx.on_mouseup();

            assert!(dropped.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_missing_provider_gives_inert_handles() {
        Owner::new().with(|| {
            let source = use_drag(BOX, || 1u8);
            let target = use_drop(&[BOX], Callback::new(|_: u8| {}));
            assert!(source.binding.is_none());
            assert!(target.binding.is_none());
            assert!(!source.is_dragging.get_untracked());
            assert!(!target.is_over.get_untracked());
        });
    }
}
