// Job application tracker: CRUD over `foster_applications` plus the kanban board view.

pub mod applications;
pub mod handlers;
