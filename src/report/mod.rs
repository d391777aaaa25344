/// Report domain - dependency records, query paths and the services that
/// extract and filter them. Nothing in here touches the filesystem.
pub mod domain;
pub mod services;
