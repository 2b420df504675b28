//! Site content: single source of truth for everything the page says.

use crate::components::{
    ICON_CODE, ICON_CUBE, ICON_GAME_CONTROLLER, ICON_LINKEDIN, ICON_VR_GOGGLES,
};
use crate::types::{Accent, ContactInfo, Portfolio, Profile, Project, Skill, SocialLink, Video};

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: PROFILE,
    skills: SKILLS,
    projects: PROJECTS,
    videos: VIDEOS,
    contact: CONTACT,
};

const PROFILE: Profile = Profile {
    name: "Perumal Pothan",
    brand: ("P", "p"),
    headline: "Game Developer & AR/VR Specialist",
    tagline: "Crafting immersive digital worlds and interactive experiences with a passion for cutting-edge technology and creative design.",
    about: "I am a Game Developer specializing in Unity and Virtual Reality development, with a strong foundation in C# programming and game development fundamentals. As a final-year Game Design and Development student, I have experience building interactive 2D, 3D, and VR applications, focusing on clean architecture, scalable systems, and optimized performance. I am passionate about creating immersive gameplay experiences and continuously improving my technical and creative skills to contribute to innovative game projects.",
    photo: "/pothan-photo.jpeg",
};

const SKILLS: &[Skill] = &[
    Skill {
        icon: ICON_GAME_CONTROLLER,
        accent: Accent::Purple,
        title: "Game Development",
        description: "Building interactive systems, mechanics, and logic using Unity.",
    },
    Skill {
        icon: ICON_VR_GOGGLES,
        accent: Accent::Blue,
        title: "AR/VR Development",
        description: "Creating immersive experiences for Quest, HoloLens, and Mobile AR.",
    },
    Skill {
        icon: ICON_CODE,
        accent: Accent::Green,
        title: "C# Programming",
        description: "Writing clean, scalable, and efficient object-oriented code.",
    },
    Skill {
        icon: ICON_CUBE,
        accent: Accent::Orange,
        title: "Maya & 3D Modeling",
        description: "Hard-surface modeling, UV mapping, and texturing assets.",
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "WithIn These Walls",
        category: "Surreal Escape Game",
        description: "A creepy, surreal movie-set escape game where the player finds hidden tickets in weird rooms and boxes before time runs out. Each level is inspired by famous thriller movies. Built with Unity, C#, and Maya.",
        image: "https://images.unsplash.com/photo-1511512578047-dfb367046420?q=80&w=2071&auto=format&fit=crop",
        tags: &["Unity", "C#", "Maya", "Game Design"],
    },
    Project {
        title: "3D Endless Runner",
        category: "Procedural Action Game",
        description: "A fast-paced prototype featuring procedural level generation, dodging obstacles, and scoring systems. Focuses on responsive controls and performance-optimized 3D assets.",
        image: "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?q=80&w=2070&auto=format&fit=crop",
        tags: &["Unity", "C#", "Algorithms", "Optimization"],
    },
];

const VIDEOS: &[Video] = &[
    Video {
        title: "Game Development Showcase 2024",
        description: "A compilation of my best game mechanics, level designs, and shader experiments from the past year.",
        video_id: "dQw4w9WgXcQ",
    },
    Video {
        title: "AR/VR Interaction Demo",
        description: "Demonstrating hand-tracking interactions and spatial UI elements in a mixed reality environment.",
        video_id: "LXb3EKWsInQ",
    },
];

const CONTACT: ContactInfo = ContactInfo {
    email: "pepoperumal262@gmail.com",
    phone_display: "+91 9390203414",
    phone_dial: "+919390203414",
    channel_url: Some("https://youtube.com/@pepoperumal"),
    socials: &[SocialLink {
        label: "LinkedIn",
        url: "http://linkedin.com/in/perumal-pothan-3730563a2",
        icon: ICON_LINKEDIN,
    }],
    credit: Some(("Webcros", "https://webcros.in")),
};
