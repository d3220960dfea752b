// Declare model modules
pub mod about_section;
pub mod coding_challenges;
pub mod competitions;
pub mod executives;
pub mod featured_projects;
pub mod gallery_images;
pub mod hackathons;
pub mod hero_content;
pub mod social_links;
pub mod workshop_materials;
pub mod workshops;
