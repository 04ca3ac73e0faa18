//! Drag Monitor
//!
//! Pure drag state machine. Knows nothing about the DOM or signals; the
//! Leptos layer feeds it pointer events and reads status back out.

/// Named kind of a drag, matched against a target's accept list
pub type DragKind = &'static str;

/// Handle for a registered drag source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(u32);

/// Handle for a registered drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(u32);

/// Mouse pressed on a source, not yet moved far enough to count as a drag
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingDrag {
    source: SourceId,
    kind: DragKind,
    start_x: i32,
    start_y: i32,
}

/// Drag in progress
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag<T> {
    pub source: SourceId,
    pub kind: DragKind,
    pub item: T,
}

#[derive(Clone, Debug, PartialEq)]
struct TargetSpec {
    id: TargetId,
    accept: Vec<DragKind>,
}

/// Drag status for every registered source and target
#[derive(Clone, Debug, PartialEq)]
pub struct DragMonitor<T> {
    next_id: u32,
    pending: Option<PendingDrag>,
    active: Option<ActiveDrag<T>>,
    hovered: Option<TargetId>,
    targets: Vec<TargetSpec>,
}

impl<T> Default for DragMonitor<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: None,
            active: None,
            hovered: None,
            targets: Vec::new(),
        }
    }
}

/// True once the pointer moved strictly beyond `threshold` px on either axis
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold: i32) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold || dy > threshold
}

impl<T> DragMonitor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn register_source(&mut self) -> SourceId {
        SourceId(self.next())
    }

    pub fn register_target(&mut self, accept: &[DragKind]) -> TargetId {
        let id = TargetId(self.next());
        self.targets.push(TargetSpec { id, accept: accept.to_vec() });
        id
    }

    pub fn unregister_target(&mut self, id: TargetId) {
        self.targets.retain(|t| t.id != id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Record a press on a source. Ignored while a drag is already active.
    pub fn press(&mut self, source: SourceId, kind: DragKind, x: i32, y: i32) {
        if self.active.is_some() {
            return;
        }
        self.pending = Some(PendingDrag { source, kind, start_x: x, start_y: y });
    }

    /// Pointer moved. Returns the pending source when the move starts a drag;
    /// the caller must follow up with [`DragMonitor::begin`].
    pub fn motion(&self, x: i32, y: i32, threshold: i32) -> Option<SourceId> {
        if self.active.is_some() {
            return None;
        }
        let pending = self.pending?;
        if exceeds_threshold((pending.start_x, pending.start_y), (x, y), threshold) {
            Some(pending.source)
        } else {
            None
        }
    }

    /// Promote the pending press to an active drag carrying `item`
    pub fn begin(&mut self, item: T) -> bool {
        match self.pending.take() {
            Some(p) => {
                self.active = Some(ActiveDrag { source: p.source, kind: p.kind, item });
                true
            }
            None => false,
        }
    }

    /// Pointer entered a target. Tracked with or without a drag, so a drag
    /// that starts inside a target is already over it.
    pub fn enter(&mut self, target: TargetId) {
        if self.targets.iter().any(|t| t.id == target) {
            self.hovered = Some(target);
        }
    }

    pub fn leave(&mut self, target: TargetId) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    /// End the gesture. Yields the drop only if an active drag is released
    /// over a registered target that accepts its kind.
    pub fn release(&mut self) -> Option<(TargetId, T)> {
        self.pending = None;
        let active = self.active.take()?;
        let target = self.hovered?;
        if self.accepts(target, active.kind) {
            Some((target, active.item))
        } else {
            None
        }
    }

    /// Abandon the gesture without dropping, e.g. the button was released
    /// outside the window and no mouseup arrived.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.active = None;
    }

    fn accepts(&self, target: TargetId, kind: DragKind) -> bool {
        self.targets
            .iter()
            .find(|t| t.id == target)
            .is_some_and(|t| t.accept.contains(&kind))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging(&self, source: SourceId) -> bool {
        self.active.as_ref().is_some_and(|a| a.source == source)
    }

    pub fn is_over(&self, target: TargetId) -> bool {
        self.active.is_some() && self.hovered == Some(target)
    }

    pub fn can_drop(&self, target: TargetId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| self.accepts(target, a.kind))
    }
}
