use crate::{
    display_object::{DisplayObject, DisplayObjectType},
    image::Image,
    input::PressedKeys,
};

/// Sprite
/// A display object bound to an image, with frame range bookkeeping.
///
/// None of the frame fields are validated: `finish` may be lower than
/// `start`, `current_index` may fall outside of both, and the coordinate
/// arrays may differ in length.
#[derive(Debug, Clone)]
pub struct Sprite {
    base: DisplayObject,
    image_name: Option<String>,
    start: i32,
    finish: i32,
    current_index: i32,
    x_array: Option<Vec<i32>>,
    y_array: Option<Vec<i32>>,
    /// Cached previous image
    prev: Option<Image>,
    /// Dirty flag for `prev`
    prev_change: bool,
}

impl Sprite {
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_base(DisplayObject::new(id), None)
    }

    pub fn with_image(id: impl Into<String>, image_name: impl Into<String>) -> Self {
        let image_name = image_name.into();
        let base = DisplayObject::with_image(id, image_name.clone());
        Self::from_base(base, Some(image_name))
    }

    fn from_base(base: DisplayObject, image_name: Option<String>) -> Self {
        log::debug!("new sprite {:?} image {:?}", base.id(), image_name);
        Self {
            base,
            image_name,
            start: 0,
            finish: 0,
            current_index: 0,
            x_array: None,
            y_array: None,
            prev: None,
            prev_change: true,
        }
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }

    /// Only the sprite's own name changes, the base keeps the one it was built with
    pub fn set_image_name(&mut self, image_name: impl Into<String>) {
        self.image_name = Some(image_name.into());
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn set_start(&mut self, start: i32) {
        self.start = start;
    }

    pub fn finish(&self) -> i32 {
        self.finish
    }

    pub fn set_finish(&mut self, finish: i32) {
        self.finish = finish;
    }

    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    pub fn set_current_index(&mut self, current_index: i32) {
        self.current_index = current_index;
    }

    pub fn x_array(&self) -> Option<&[i32]> {
        self.x_array.as_deref()
    }

    pub fn set_x_array(&mut self, x_array: impl Into<Option<Vec<i32>>>) {
        self.x_array = x_array.into();
    }

    pub fn y_array(&self) -> Option<&[i32]> {
        self.y_array.as_deref()
    }

    pub fn set_y_array(&mut self, y_array: impl Into<Option<Vec<i32>>>) {
        self.y_array = y_array.into();
    }

    pub fn prev(&self) -> Option<&Image> {
        self.prev.as_ref()
    }

    pub fn set_prev(&mut self, prev: impl Into<Option<Image>>) {
        self.prev = prev.into();
    }

    pub fn is_prev_change(&self) -> bool {
        self.prev_change
    }

    pub fn set_prev_change(&mut self, prev_change: bool) {
        self.prev_change = prev_change;
    }
}

impl DisplayObjectType for Sprite {
    fn base(&self) -> &DisplayObject {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DisplayObject {
        &mut self.base
    }

    fn update(&mut self, pressed: &PressedKeys) {
        self.base.update(pressed);
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_new_sprite_defaults() {
        let sprite = Sprite::new("player");
        assert_eq!(sprite.base().id(), "player");
        assert_eq!(sprite.image_name(), None);
        assert_eq!(sprite.start(), 0);
        assert_eq!(sprite.finish(), 0);
        assert_eq!(sprite.current_index(), 0);
        assert_eq!(sprite.x_array(), None);
        assert_eq!(sprite.y_array(), None);
        assert!(sprite.prev().is_none());
        assert!(sprite.is_prev_change());
    }

    #[test]
    fn test_sprite_with_image() {
        let sprite = Sprite::with_image("coin", "coin.png");
        assert_eq!(sprite.image_name(), Some("coin.png"));
        assert_eq!(sprite.base().image_name(), Some("coin.png"));

        let sprite = Sprite::with_image("", "");
        assert_eq!(sprite.base().id(), "");
        assert_eq!(sprite.image_name(), Some(""));
    }

    #[test]
    fn test_set_image_name() {
        let mut sprite = Sprite::with_image("coin", "coin.png");
        sprite.set_image_name("coin_spin.png");
        assert_eq!(sprite.image_name(), Some("coin_spin.png"));
        assert_eq!(sprite.base().image_name(), Some("coin.png"));
    }

    #[test]
    fn test_rand_frame_fields() {
        let mut rng = thread_rng();
        let mut sprite = Sprite::new("anim");
        for _ in 0..64 {
            let (start, finish, index): (i32, i32, i32) = rng.gen();
            sprite.set_start(start);
            sprite.set_finish(finish);
            sprite.set_current_index(index);
            assert_eq!(sprite.start(), start);
            assert_eq!(sprite.finish(), finish);
            assert_eq!(sprite.current_index(), index);

            let flag: bool = rng.gen();
            sprite.set_prev_change(flag);
            assert_eq!(sprite.is_prev_change(), flag);
        }
    }

    #[test]
    fn test_rand_coordinate_arrays() {
        let mut rng = thread_rng();
        let mut sprite = Sprite::new("sheet");
        let xs: Vec<i32> = (0..rng.gen_range(0..32)).map(|_| rng.gen()).collect();
        let ys: Vec<i32> = (0..rng.gen_range(0..32)).map(|_| rng.gen()).collect();
        sprite.set_x_array(xs.clone());
        sprite.set_y_array(ys.clone());
        assert_eq!(sprite.x_array(), Some(xs.as_slice()));
        assert_eq!(sprite.y_array(), Some(ys.as_slice()));

        sprite.set_x_array(None);
        assert_eq!(sprite.x_array(), None);
        assert_eq!(sprite.y_array(), Some(ys.as_slice()));
    }

    #[test]
    fn test_no_frame_validation() {
        let mut sprite = Sprite::new("odd");
        sprite.set_start(10);
        sprite.set_finish(-3);
        sprite.set_current_index(99);
        sprite.set_x_array(vec![1, 2, 3]);
        sprite.set_y_array(vec![]);
        assert_eq!((sprite.start(), sprite.finish()), (10, -3));
        assert_eq!(sprite.current_index(), 99);
        assert_eq!(sprite.x_array().map(<[i32]>::len), Some(3));
        assert_eq!(sprite.y_array().map(<[i32]>::len), Some(0));
    }

    #[test]
    fn test_prev_image_is_same_bitmap() {
        let img = Image::new(4, 4);
        let mut sprite = Sprite::new("cached");
        sprite.set_prev(img.clone());
        assert!(Image::ptr_eq(sprite.prev().unwrap(), &img));

        sprite.set_prev(None);
        assert!(sprite.prev().is_none());
    }

    #[test]
    fn test_update_forwards_without_mutation() {
        let _ = env_logger::builder().is_test(true).try_init();

        let img = Image::new(1, 1);
        let mut sprite = Sprite::with_image("mario", "mario.png");
        sprite.set_start(2);
        sprite.set_finish(5);
        sprite.set_current_index(3);
        sprite.set_x_array(vec![0, 16, 32]);
        sprite.set_y_array(vec![0, 0, 0]);
        sprite.set_prev(img.clone());
        sprite.set_prev_change(false);
        let base = sprite.base().clone();

        let pressed: PressedKeys = [KeyCode::Up, KeyCode::KeyA].into_iter().collect();
        sprite.update(&pressed);
        sprite.update(&PressedKeys::new());

        assert_eq!(sprite.base(), &base);
        assert_eq!(sprite.image_name(), Some("mario.png"));
        assert_eq!(sprite.start(), 2);
        assert_eq!(sprite.finish(), 5);
        assert_eq!(sprite.current_index(), 3);
        assert_eq!(sprite.x_array(), Some(&[0, 16, 32][..]));
        assert_eq!(sprite.y_array(), Some(&[0, 0, 0][..]));
        assert!(Image::ptr_eq(sprite.prev().unwrap(), &img));
        assert!(!sprite.is_prev_change());
    }

    #[test]
    fn test_update_through_trait_object() {
        let mut objects: Vec<Box<dyn DisplayObjectType>> = vec![
            Box::new(DisplayObject::new("bg")),
            Box::new(Sprite::with_image("hero", "hero.png")),
        ];
        let pressed = PressedKeys::new();
        for obj in objects.iter_mut() {
            obj.update(&pressed);
        }
        assert_eq!(objects[1].base().image_name(), Some("hero.png"));
    }
}
