mod get_featured_projects;
mod get_home_content;
mod get_project_by_slug;
mod get_projects;
mod get_skills;
mod get_testimonials;
mod get_work_experience;

pub use get_featured_projects::*;
pub use get_home_content::*;
pub use get_project_by_slug::*;
pub use get_projects::*;
pub use get_skills::*;
pub use get_testimonials::*;
pub use get_work_experience::*;
