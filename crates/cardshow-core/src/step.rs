//! Presentable steps and the grouped containers they may share a player with.

/// Index of a grouped container (a layout that owns one shared media player).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// One unit of presentable content. Its identity is its position in the
/// sequencer's step list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    media_ref: Option<String>,
    group: Option<GroupId>,
    owns_media: bool,
    pub(crate) active: bool,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media reference swapped into the group's shared player. Blank
    /// references count as none.
    pub fn with_media_ref(mut self, media_ref: impl Into<String>) -> Self {
        let media_ref = media_ref.into();
        self.media_ref = (!media_ref.trim().is_empty()).then_some(media_ref);
        self
    }

    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Marks the step as containing its own embedded media element.
    pub fn owning_media(mut self) -> Self {
        self.owns_media = true;
        self
    }

    pub fn media_ref(&self) -> Option<&str> {
        self.media_ref.as_deref()
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn owns_media(&self) -> bool {
        self.owns_media
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
