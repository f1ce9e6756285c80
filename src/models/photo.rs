use serde::{Deserialize, Serialize};

/// 摄影作品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub title: String,
    /// e.g. "Sony A7III • 35mm f/1.4"
    pub exif: String,
    /// 宽高只表示比例 (4:3, 3:4 ...)，不是像素
    pub width: u32,
    pub height: u32,
}

impl Photo {
    /// height / width, used to size the gallery tile
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        let photo = Photo {
            id: "ph1".to_string(),
            url: String::new(),
            title: String::new(),
            exif: String::new(),
            width: 4,
            height: 3,
        };
        assert!((photo.aspect_ratio() - 0.75).abs() < f32::EPSILON);
    }
}
