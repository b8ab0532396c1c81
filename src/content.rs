//! Literal page content.

use crate::navigation::Section;

pub const BRAND: &str = "Emmanuel";
pub const BRAND_SUFFIX: &str = ".Survey";
pub const OWNER_NAME: &str = "Emmanuel Kenneth";
pub const TAGLINE: &str = "Professional Surveyor | Project Manager | Geomatics Expert";
pub const HERO_VIDEO: &str = "/images/All survey instruments.mp4";
pub const PORTRAIT: &str = "/images/ken.jpeg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Even entries sit left of the timeline, odd entries right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-entry is-left",
            Self::Right => "timeline-entry is-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallaxImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [Section; 6] = Section::ALL;

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "A highly skilled and dedicated surveyor with over 7 years of experience in the field of surveying and geoinformatics. Specializing in Cadastral, Hydrographic, Topographic, and Engineering surveys, as well as Aerial Photogrammetry, Remote Sensing, GIS, and Spatial Analysis.",
    "A graduate of the Federal University of Technology, Owerri (F.U.T.O), Emmanuel holds a Bachelor of Technology degree in Surveying and Geoinformatics (2019). He is also a certified Project Management Professional (PMP) and Business Strategy Consultant.",
];

pub const ABOUT_STATS: [Stat; 2] = [
    Stat {
        value: "7+",
        label: "Years Experience",
    },
    Stat {
        value: "150+",
        label: "Projects Completed",
    },
];

pub const SHOWCASE_STATS: [Stat; 2] = [
    Stat {
        value: "150+",
        label: "Projects Completed",
    },
    Stat {
        value: "12+",
        label: "States Covered",
    },
];

pub const EXPERIENCES: [ExperienceEntry; 3] = [
    ExperienceEntry {
        year: "2021-Present",
        title: "Survey Party Chief & Project Director",
        company: "OTIC Surveys Ltd.",
        description: "Led over 150 projects across diverse surveying disciplines, demonstrating exceptional leadership and technical proficiency.",
    },
    ExperienceEntry {
        year: "2019-2021",
        title: "Project Surveyor",
        company: "GeoMap Solutions",
        description: "Conducted surveys for urban infrastructure projects including highways and public transit systems.",
    },
    ExperienceEntry {
        year: "2017-2019",
        title: "Junior Surveyor",
        company: "TerraTech Surveying",
        description: "Assisted senior surveyors with field measurements and data collection for various projects.",
    },
];

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Land Surveying",
        level: 95,
    },
    Skill {
        name: "GPS Technology",
        level: 90,
    },
    Skill {
        name: "AutoCAD",
        level: 85,
    },
    Skill {
        name: "GIS Mapping",
        level: 88,
    },
    Skill {
        name: "Construction Staking",
        level: 92,
    },
    Skill {
        name: "Boundary Surveys",
        level: 94,
    },
];

pub const GALLERY_IMAGES: [GalleryImage; 4] = [
    GalleryImage {
        id: 1,
        src: "/images/image-1.jpg",
        alt: "Cadastral survey work",
        caption: "Cadastral Survey",
    },
    GalleryImage {
        id: 2,
        src: "/images/image-2.jpg",
        alt: "Hydrographic survey work",
        caption: "Hydrographic Mapping",
    },
    GalleryImage {
        id: 3,
        src: "/images/image-3.jpg",
        alt: "Topographic survey work",
        caption: "Topographic Mapping",
    },
    GalleryImage {
        id: 4,
        src: "/images/image-4.jpg",
        alt: "Aerial photogrammetry",
        caption: "Aerial Photogrammetry",
    },
];

pub const PARALLAX_IMAGES: [ParallaxImage; 12] = [
    ParallaxImage {
        src: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5",
        alt: "Project 1",
    },
    ParallaxImage {
        src: "https://images.unsplash.com/photo-1489514354504-1653aa90e34e",
        alt: "Project 2",
    },
    ParallaxImage {
        src: "/images/image-2.jpg",
        alt: "Project 3",
    },
    ParallaxImage {
        src: "/images/image-3.jpg",
        alt: "Project 4",
    },
    ParallaxImage {
        src: "/images/image-3.jpg",
        alt: "Project 5",
    },
    ParallaxImage {
        src: "/images/image-4.jpg",
        alt: "Project 6",
    },
    ParallaxImage {
        src: "/images/image-5.jpg",
        alt: "Project 7",
    },
    ParallaxImage {
        src: "/images/image-6.jpg",
        alt: "Project 8",
    },
    ParallaxImage {
        src: "/images/image-7.jpg",
        alt: "Project 9",
    },
    ParallaxImage {
        src: "/images/image-8.jpg",
        alt: "Project 10",
    },
    ParallaxImage {
        src: "/images/image-9.jpg",
        alt: "Project 11",
    },
    ParallaxImage {
        src: "/images/image-10.jpg",
        alt: "Project 12",
    },
];

pub const SERVICES: [ServiceOffering; 9] = [
    ServiceOffering {
        title: "Cadastral Surveys",
        description: "Accurate boundary surveys for property delineation and land ownership.",
        icon: "📏",
    },
    ServiceOffering {
        title: "Hydrographic Surveys",
        description: "Detailed mapping of water bodies for navigation and construction planning.",
        icon: "🌊",
    },
    ServiceOffering {
        title: "Topographic Surveys",
        description: "Comprehensive mapping of land contours, elevations, and existing features.",
        icon: "🏔️",
    },
    ServiceOffering {
        title: "Aerial Photogrammetry",
        description: "High-precision 3D mapping using drone technology.",
        icon: "🛸",
    },
    ServiceOffering {
        title: "Land Survey",
        description: "Determining and marking property lines, resolving disputes, and designing subdivisions.",
        icon: "📍",
    },
    ServiceOffering {
        title: "Engineering/Construction Survey",
        description: "Marking proposed structures, ensuring accurate placement, and verifying as-built conditions.",
        icon: "🏗️",
    },
    ServiceOffering {
        title: "Route Survey",
        description: "Surveying linear strips of land for roads, pipelines, and transmission lines.",
        icon: "🛣️",
    },
    ServiceOffering {
        title: "Aerial Survey (Photogrammetric Survey)",
        description: "Creating maps and 3D models using aerial photographs or LiDAR data.",
        icon: "🛩️",
    },
    ServiceOffering {
        title: "3D Laser Scanning",
        description: "Capturing detailed 3D data for architectural, industrial, and accident reconstruction purposes.",
        icon: "🔍",
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "emmanuel@example.com",
        icon: "✉",
    },
    ContactDetail {
        label: "Phone",
        value: "+234 814 154 4655",
        icon: "☎",
    },
    ContactDetail {
        label: "Office",
        value: "123 Main Street, Suite 200, Anytown, USA",
        icon: "⌖",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "Facebook",
        href: "https://fb.com/emmanuel.kenneth54",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/manlikekenzay",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gallery_ids_are_unique() {
        let ids: HashSet<u32> = GALLERY_IMAGES.iter().map(|image| image.id).collect();
        assert_eq!(ids.len(), GALLERY_IMAGES.len());
    }

    #[test]
    fn nav_covers_every_section_once() {
        let ids: HashSet<&str> = NAV_ITEMS.iter().map(|section| section.id()).collect();
        assert_eq!(
            ids,
            HashSet::from(["home", "about", "experience", "gallery", "services", "contact"])
        );
    }

    #[test]
    fn timeline_alternates_by_index_parity() {
        let sides: Vec<TimelineSide> = (0..EXPERIENCES.len())
            .map(TimelineSide::for_index)
            .collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
    }
}
