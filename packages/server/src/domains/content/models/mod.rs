pub mod about;
pub mod approach;
pub mod contact;
pub mod document;
pub mod hero;
pub mod programs;
pub mod section;
pub mod testimonials;
pub mod where_can_you_go;

pub use about::{AboutContent, Statement};
pub use approach::{ApproachCard, ApproachContent};
pub use contact::{ContactContent, SocialLinks};
pub use document::ContentDocument;
pub use hero::HeroContent;
pub use programs::{ProgramCard, ProgramsContent};
pub use section::{ContentSection, SectionKey};
pub use testimonials::{Testimonial, TestimonialsContent};
pub use where_can_you_go::WhereCanYouGoContent;
