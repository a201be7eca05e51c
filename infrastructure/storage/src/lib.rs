pub mod dir;
pub mod transient_image {
    pub mod file;
    pub mod store;
}
