//! Container configuration, building, and live-handle access.

use tracing::debug;

use crate::container::kind::{ContainerKind, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::core::content::Content;
use crate::core::error::Error;
use crate::core::event::{ContainerEvent, EventKind};
use crate::core::handler::{Handler, HandlerTable};
use crate::core::key::IdentityKey;
use crate::core::shape::{ShapeGrid, COLUMNS};
use crate::platform::{HandleId, Host, SubjectId};
use crate::runtime::registry::{Registry, SharedContainer};

/// A configurable container that becomes live once built against a host.
///
/// Lifecycle: every container starts in a configuring state where title,
/// staged slots, shape, and handlers may be set freely. [`build`] validates
/// the configuration, realizes the container with the host, and pins the
/// resulting [`HandleId`]; from then on the container is live and a second
/// [`build`] fails. [`register`] hands the container to a [`Registry`] so the
/// router can find it by handle identity.
///
/// [`build`]: Container::build
/// [`register`]: Container::register
#[derive(Debug)]
pub struct Container {
    kind: ContainerKind,
    key: IdentityKey,
    title: String,
    staged: Vec<Option<Content>>,
    shape: Option<ShapeGrid>,
    handlers: HandlerTable,
    live: Option<HandleId>,
}

impl Container {
    /// Create a container of the given kind under the given identity key.
    ///
    /// The staged buffer starts at the kind's default size with every slot
    /// empty.
    pub fn new(kind: ContainerKind, key: IdentityKey) -> Self {
        Self {
            kind,
            key,
            title: "Default".to_string(),
            staged: vec![None; kind.default_size()],
            shape: None,
            handlers: HandlerTable::new(),
            live: None,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn key(&self) -> &IdentityKey {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The live handle, present only once built.
    pub fn live(&self) -> Option<HandleId> {
        self.live
    }

    /// Current slot count: the realized size once built, the staged size
    /// before.
    pub fn size(&self) -> usize {
        self.staged.len()
    }

    pub fn shape(&self) -> Option<&ShapeGrid> {
        self.shape.as_ref()
    }

    /// Replace the title. Defaults to `"Default"`.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Attach a shape that will populate the staged slots at build time.
    ///
    /// Re-sizes the staged buffer to the shape's implied size. Fails with
    /// [`Error::ShapeUnsupported`] for fixed-layout kinds and with
    /// [`Error::AlreadyBuilt`] once live.
    pub fn attach_shape(&mut self, shape: ShapeGrid) -> Result<&mut Self, Error> {
        if !self.kind.supports_shaping() {
            return Err(Error::ShapeUnsupported { kind: self.kind });
        }
        if self.live.is_some() {
            return Err(Error::AlreadyBuilt);
        }
        self.staged.resize(shape.implied_size(), None);
        self.shape = Some(shape);
        Ok(self)
    }

    /// Stage `content` at `index`.
    ///
    /// The index must lie inside the current staged size; attach a shape or
    /// rely on the kind's default size to pre-size the buffer.
    pub fn set_slot(&mut self, index: usize, content: Content) -> Result<&mut Self, Error> {
        let len = self.staged.len();
        let slot = self
            .staged
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange { index, len })?;
        *slot = Some(content);
        Ok(self)
    }

    /// Stage an empty slot at `index`, leaving host placeholder content alone
    /// at build time.
    pub fn clear_slot(&mut self, index: usize) -> Result<&mut Self, Error> {
        let len = self.staged.len();
        let slot = self
            .staged
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange { index, len })?;
        *slot = None;
        Ok(self)
    }

    /// Validate the configuration and realize the container with the host.
    ///
    /// Grid containers size themselves from, in order of precedence: the
    /// attached shape's implied size, `explicit_size` (a multiple of 9 in
    /// 9..=54, which must agree with any attached shape), or the 27-slot
    /// default. Fixed-layout kinds reject `explicit_size` outright.
    ///
    /// All validation happens before the host is touched; on failure nothing
    /// has changed. Staged empty slots are skipped rather than written so
    /// host-default placeholder content survives.
    pub fn build(
        &mut self,
        host: &mut dyn Host,
        explicit_size: Option<usize>,
    ) -> Result<&mut Self, Error> {
        if self.live.is_some() {
            return Err(Error::AlreadyBuilt);
        }

        let (size, resolved) = self.validate_build(explicit_size)?;

        self.staged.resize(size, None);
        if let Some(resolved) = resolved {
            for (index, content) in resolved.into_iter().enumerate() {
                self.staged[index] = Some(content);
            }
        }

        let handle = host.create(self.kind, size, &self.title);
        for (index, slot) in self.staged.iter().enumerate() {
            if let Some(content) = slot {
                host.set_slot(handle, index, content);
            }
        }

        debug!(key = %self.key, handle = handle.raw(), size, "container built");
        self.live = Some(handle);
        Ok(self)
    }

    /// Size determination and shape resolution, with no mutation.
    fn validate_build(
        &self,
        explicit_size: Option<usize>,
    ) -> Result<(usize, Option<Vec<Content>>), Error> {
        match self.kind.fixed_size() {
            Some(fixed) => {
                if explicit_size.is_some() {
                    return Err(Error::ExplicitSizeUnsupported { kind: self.kind });
                }
                Ok((fixed, None))
            }
            None => {
                let resolved = match &self.shape {
                    Some(shape) => Some(shape.resolve_slots()?),
                    None => None,
                };
                let mandated = self.shape.as_ref().map(ShapeGrid::implied_size);
                let size = match explicit_size {
                    Some(size) => {
                        if size < MIN_GRID_SIZE || size > MAX_GRID_SIZE || size % COLUMNS != 0 {
                            return Err(Error::InvalidSize { size });
                        }
                        if let Some(expected) = mandated {
                            if size != expected {
                                return Err(Error::SizeShapeMismatch { size, expected });
                            }
                        }
                        size
                    }
                    None => mandated.unwrap_or_else(|| self.kind.default_size()),
                };
                Ok((size, resolved))
            }
        }
    }

    /// Hand this container to the registry under its identity key.
    ///
    /// Always succeeds; a key collision silently replaces the earlier entry.
    /// Returns the shared handle for further chaining. Registering before
    /// building is legal, the container just cannot match events yet.
    pub fn register(self, registry: &mut Registry) -> SharedContainer {
        registry.insert(self)
    }

    /// Present the live container to `subject`.
    pub fn open(&self, host: &mut dyn Host, subject: SubjectId) -> Result<(), Error> {
        let handle = self.live.ok_or(Error::NotBuilt)?;
        host.present(handle, subject);
        Ok(())
    }

    /// Force-close the live container for every viewer.
    pub fn close(&self, host: &mut dyn Host) -> Result<(), Error> {
        let handle = self.live.ok_or(Error::NotBuilt)?;
        host.dismiss(handle);
        Ok(())
    }

    /// Slot contents: read from the live handle once built, from the staged
    /// buffer before.
    pub fn slots(&self, host: &dyn Host) -> Vec<Option<Content>> {
        match self.live {
            Some(handle) => host.contents(handle),
            None => self.staged.clone(),
        }
    }

    /// Run this container's handler for the event's kind. No-op when unset.
    pub fn handle_event(&mut self, event: &ContainerEvent) {
        self.handlers.handle(event);
    }

    /// Store `handler` as the single callback for `kind`, replacing any
    /// previous one.
    pub fn set_handler(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.set(kind, handler);
        self
    }

    pub fn on_open<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Open, Box::new(handler))
    }

    pub fn on_close<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Close, Box::new(handler))
    }

    pub fn on_click<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Click, Box::new(handler))
    }

    pub fn on_drag<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Drag, Box::new(handler))
    }

    pub fn on_creative_edit<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::CreativeEdit, Box::new(handler))
    }

    pub fn on_pickup<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Pickup, Box::new(handler))
    }

    pub fn on_transfer<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&ContainerEvent) + Send + 'static,
    {
        self.set_handler(EventKind::Transfer, Box::new(handler))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::Container;
    use crate::container::kind::ContainerKind;
    use crate::core::content::Content;
    use crate::core::error::Error;
    use crate::core::key::IdentityKey;
    use crate::core::shape::ShapeGrid;
    use crate::platform::{Host, MemoryHost, SubjectId};

    fn key(name: &str) -> IdentityKey {
        IdentityKey::new("test", name)
    }

    fn three_row_shape() -> ShapeGrid {
        let mut shape = ShapeGrid::new(3).unwrap();
        shape.set_row("AAAAAAAAA", 1).unwrap();
        shape.set_row("BBBBBBBBB", 2).unwrap();
        shape.set_row("CCCCCCCCC", 3).unwrap();
        shape.map_letter('A', Content::new("item_x")).unwrap();
        shape.map_letter('B', Content::new("item_y")).unwrap();
        shape.map_letter('C', Content::new("item_z")).unwrap();
        shape
    }

    #[test]
    fn new_container_stages_the_default_size_with_a_default_title() {
        let container = Container::new(ContainerKind::Grid, key("fresh"));
        assert_eq!(container.title(), "Default");
        assert_eq!(container.size(), 27);
        assert_eq!(container.live(), None);

        let strip = Container::new(ContainerKind::Strip, key("strip"));
        assert_eq!(strip.size(), 5);
    }

    #[test]
    fn attach_shape_rejects_fixed_layout_kinds() {
        let mut container = Container::new(ContainerKind::Panel, key("panel"));
        assert_matches!(
            container.attach_shape(three_row_shape()),
            Err(Error::ShapeUnsupported {
                kind: ContainerKind::Panel
            })
        );
    }

    #[test]
    fn attach_shape_resizes_the_staged_buffer() {
        let mut container = Container::new(ContainerKind::Grid, key("shaped"));
        let shape = ShapeGrid::new(6).unwrap();
        container.attach_shape(shape).unwrap();
        assert_eq!(container.size(), 54);
    }

    #[test]
    fn set_slot_enforces_the_staged_range() {
        let mut container = Container::new(ContainerKind::Grid, key("slots"));
        container.set_slot(0, Content::new("stone")).unwrap();
        container.set_slot(26, Content::new("stone")).unwrap();
        assert_matches!(
            container.set_slot(27, Content::new("stone")),
            Err(Error::SlotOutOfRange { index: 27, len: 27 })
        );
    }

    #[test]
    fn build_defaults_a_bare_grid_to_27_slots() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("bare"));
        container.build(&mut host, None).unwrap();

        let handle = container.live().unwrap();
        assert_eq!(host.contents(handle).len(), 27);
        assert_eq!(host.title_of(handle), Some("Default"));
    }

    #[test]
    fn build_writes_staged_content_and_skips_empty_slots() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("partial"));
        container.set_slot(2, Content::new("compass")).unwrap();
        container.build(&mut host, None).unwrap();

        let handle = container.live().unwrap();
        assert_eq!(host.slot(handle, 2), Some(Content::new("compass")));
        assert_eq!(host.slot(handle, 0), None);
    }

    #[test]
    fn build_resolves_an_attached_shape_into_the_host() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("shaped"));
        container.attach_shape(three_row_shape()).unwrap();
        container.build(&mut host, None).unwrap();

        let handle = container.live().unwrap();
        let contents = host.contents(handle);
        assert_eq!(contents.len(), 27);
        assert_eq!(contents[0], Some(Content::new("item_x")));
        assert_eq!(contents[13], Some(Content::new("item_y")));
        assert_eq!(contents[26], Some(Content::new("item_z")));
    }

    #[test]
    fn explicit_size_must_agree_with_the_attached_shape() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("mismatch"));
        container.attach_shape(three_row_shape()).unwrap();

        assert_matches!(
            container.build(&mut host, Some(18)),
            Err(Error::SizeShapeMismatch {
                size: 18,
                expected: 27
            })
        );
        // Nothing was realized by the failed build.
        assert_eq!(host.realized_count(), 0);
        assert_eq!(container.live(), None);

        container.build(&mut host, Some(27)).unwrap();
        assert_eq!(host.realized_count(), 1);
    }

    #[test]
    fn explicit_size_must_be_a_multiple_of_nine_within_bounds() {
        let mut host = MemoryHost::new();
        for bad in [0, 8, 10, 63] {
            let mut container = Container::new(ContainerKind::Grid, key("bad_size"));
            assert_matches!(
                container.build(&mut host, Some(bad)),
                Err(Error::InvalidSize { .. })
            );
        }

        let mut container = Container::new(ContainerKind::Grid, key("six_rows"));
        container.build(&mut host, Some(54)).unwrap();
        assert_eq!(container.size(), 54);
    }

    #[test]
    fn fixed_layout_kinds_reject_an_explicit_size() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Strip, key("strip"));
        assert_matches!(
            container.build(&mut host, Some(9)),
            Err(Error::ExplicitSizeUnsupported {
                kind: ContainerKind::Strip
            })
        );

        container.build(&mut host, None).unwrap();
        assert_eq!(container.size(), 5);
    }

    #[test]
    fn unmapped_shape_letters_fail_the_build_atomically() {
        let mut host = MemoryHost::new();
        let mut shape = ShapeGrid::new(1).unwrap();
        shape.set_row("AB", 1).unwrap();
        shape.map_letter('A', Content::new("stone")).unwrap();

        let mut container = Container::new(ContainerKind::Grid, key("unmapped"));
        container.attach_shape(shape).unwrap();
        assert_matches!(
            container.build(&mut host, None),
            Err(Error::LetterUnmapped { letter: 'B' })
        );
        assert_eq!(host.realized_count(), 0);
    }

    #[test]
    fn rebuilding_is_a_state_error() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("twice"));
        container.build(&mut host, None).unwrap();
        assert_matches!(container.build(&mut host, None), Err(Error::AlreadyBuilt));
        assert_matches!(
            container.attach_shape(three_row_shape()),
            Err(Error::AlreadyBuilt)
        );
    }

    #[test]
    fn open_and_close_require_a_live_handle() {
        let mut host = MemoryHost::new();
        let container = Container::new(ContainerKind::Grid, key("unbuilt"));
        assert_matches!(
            container.open(&mut host, SubjectId::new(1)),
            Err(Error::NotBuilt)
        );
        assert_matches!(container.close(&mut host), Err(Error::NotBuilt));
    }

    #[test]
    fn open_presents_and_close_dismisses() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("live"));
        container.build(&mut host, None).unwrap();
        let handle = container.live().unwrap();

        container.open(&mut host, SubjectId::new(7)).unwrap();
        assert_eq!(host.viewers_of(handle), &[SubjectId::new(7)]);

        container.close(&mut host).unwrap();
        assert!(host.viewers_of(handle).is_empty());
    }

    #[test]
    fn slots_read_staged_before_build_and_live_after() {
        let mut host = MemoryHost::new();
        let mut container = Container::new(ContainerKind::Grid, key("slots"));
        container.set_slot(5, Content::new("map")).unwrap();

        let staged = container.slots(&host);
        assert_eq!(staged[5], Some(Content::new("map")));

        container.build(&mut host, None).unwrap();
        let handle = container.live().unwrap();
        host.set_slot(handle, 6, &Content::new("lens"));

        let live = container.slots(&host);
        assert_eq!(live[5], Some(Content::new("map")));
        assert_eq!(live[6], Some(Content::new("lens")));
    }
}
