//! Built-in slides shown until (or instead of) fetched content.

use crate::rotation::{ItemList, RotationItem};

pub fn hero_items() -> ItemList {
    ItemList::new(vec![
        RotationItem::image("default-hero-1", "/assets/hero/classroom.jpg", 1),
        RotationItem::image("default-hero-2", "/assets/hero/lab.jpg", 2),
        RotationItem::image("default-hero-3", "/assets/hero/graduation.jpg", 3),
    ])
}

pub fn team_items() -> ItemList {
    ItemList::new(vec![
        RotationItem::image("default-team-1", "/assets/team/faculty.jpg", 11),
        RotationItem::image("default-team-2", "/assets/team/mentors.jpg", 12),
    ])
}

pub fn contact_items() -> ItemList {
    ItemList::new(vec![
        RotationItem::image("contact-1", "/assets/contact/front-desk.jpg", 1),
        RotationItem::image("contact-2", "/assets/contact/campus.jpg", 2),
        RotationItem::image("contact-3", "/assets/contact/counselling.jpg", 3),
    ])
}
