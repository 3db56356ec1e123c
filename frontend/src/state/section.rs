use std::fmt;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Page sections in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Services,
    Videos,
    Gallery,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Videos,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Videos => "videos",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Videos => "Videos",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One intersection notification for a watched section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub section: SectionId,
    pub is_intersecting: bool,
}

/// The section currently under the viewport midpoint. The last intersecting
/// entry wins; entries leaving the band never clear the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Returns true when the active section changed.
    pub fn observe(&mut self, section: SectionId, is_intersecting: bool) -> bool {
        if !is_intersecting || self.current == section {
            return false;
        }
        self.current = section;
        true
    }
}

impl Reducible for ActiveSection {
    type Action = SectionEntry;

    fn reduce(self: Rc<Self>, entry: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if !next.observe(entry.section, entry.is_intersecting) {
            return self;
        }
        debug!("Active section: {}", next.current);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section: SectionId, is_intersecting: bool) -> SectionEntry {
        SectionEntry {
            section,
            is_intersecting,
        }
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(ActiveSection::default().current(), SectionId::Home);
    }

    #[test]
    fn crossing_the_midpoint_selects_that_section() {
        let mut active = ActiveSection::default();
        assert!(active.observe(SectionId::Gallery, true));
        assert_eq!(active.current(), SectionId::Gallery);
    }

    #[test]
    fn leaving_the_band_keeps_selection() {
        let mut active = ActiveSection::default();
        active.observe(SectionId::About, true);
        assert!(!active.observe(SectionId::About, false));
        assert!(!active.observe(SectionId::Services, false));
        assert_eq!(active.current(), SectionId::About);
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let active = [
            entry(SectionId::Services, true),
            entry(SectionId::Videos, true),
            entry(SectionId::Contact, false),
        ]
        .into_iter()
        .fold(Rc::new(ActiveSection::default()), |active, entry| {
            active.reduce(entry)
        });
        assert_eq!(active.current(), SectionId::Videos);
    }

    #[test]
    fn reducer_skips_rerender_when_unchanged() {
        let active = Rc::new(ActiveSection::default());
        let same = active.clone().reduce(entry(SectionId::Home, true));
        assert!(Rc::ptr_eq(&active, &same));

        let moved = active.reduce(entry(SectionId::Contact, true));
        assert_eq!(moved.current(), SectionId::Contact);
    }

    #[test]
    fn ids_are_lowercase_anchors() {
        for section in SectionId::ALL {
            assert_eq!(section.id(), section.label().to_lowercase());
            assert_eq!(section.href(), format!("#{}", section));
        }
        assert_eq!(SectionId::Videos.href(), "#videos");
    }
}
