use kernel::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostMarker;
pub type PostId = Id<PostMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_new() {
        let post_id = PostId::new();
        assert_eq!(post_id.as_uuid().get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let post_id = PostId::from_uuid(uuid);
        assert_eq!(post_id.as_uuid(), &uuid);
    }
}
