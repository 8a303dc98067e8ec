use crate::input::PressedKeys;

/// DisplayObject
/// Base data of anything that is updated each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayObject {
    id: String,
    image_name: Option<String>,
    visible: bool,
}

impl DisplayObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_name: None,
            visible: true,
        }
    }

    pub fn with_image(id: impl Into<String>, image_name: impl Into<String>) -> Self {
        Self {
            image_name: Some(image_name.into()),
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }

    pub fn set_image_name(&mut self, image_name: impl Into<String>) {
        self.image_name = Some(image_name.into());
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Per frame update
    pub fn update(&mut self, pressed: &PressedKeys) {
        log::trace!("update {:?} with {} pressed keys", self.id, pressed.len());
    }
}

/// Types that wrap a DisplayObject and take part in the frame update
pub trait DisplayObjectType {
    fn base(&self) -> &DisplayObject;

    fn base_mut(&mut self) -> &mut DisplayObject;

    /// Called once per frame with the keys currently held down
    fn update(&mut self, pressed: &PressedKeys) {
        self.base_mut().update(pressed);
    }
}

impl DisplayObjectType for DisplayObject {
    fn base(&self) -> &DisplayObject {
        self
    }

    fn base_mut(&mut self) -> &mut DisplayObject {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_new_display_object() {
        let obj = DisplayObject::new("");
        assert_eq!(obj.id(), "");
        assert_eq!(obj.image_name(), None);
        assert!(obj.is_visible());

        let obj = DisplayObject::with_image("coin", "coin.png");
        assert_eq!(obj.id(), "coin");
        assert_eq!(obj.image_name(), Some("coin.png"));
    }

    #[test]
    fn test_accessors() {
        let mut obj = DisplayObject::new("a");
        obj.set_id("b");
        obj.set_image_name("b.png");
        obj.set_visible(false);
        assert_eq!(obj.id(), "b");
        assert_eq!(obj.image_name(), Some("b.png"));
        assert!(!obj.is_visible());
    }

    #[test]
    fn test_update_keeps_state() {
        let mut obj = DisplayObject::with_image("mario", "mario.png");
        let before = obj.clone();
        let pressed: PressedKeys = [KeyCode::Right, KeyCode::Space].into_iter().collect();
        DisplayObjectType::update(&mut obj, &pressed);
        assert_eq!(obj, before);
    }
}
