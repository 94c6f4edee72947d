/// Database access layer
///
/// One function per statement; every value from the request is bound
/// positionally, never formatted into the SQL text.
pub mod comment_repo;
pub mod post_repo;
