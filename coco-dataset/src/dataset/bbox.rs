use crate::common::*;

/// Bounding box in pixel units, stored as the left-top corner and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[R64; 4]", into = "[R64; 4]")]
pub struct BBox {
    pub x: R64,
    pub y: R64,
    pub w: R64,
    pub h: R64,
}

impl BBox {
    pub fn from_xywh(xywh: [R64; 4]) -> Self {
        let [x, y, w, h] = xywh;
        Self { x, y, w, h }
    }

    pub fn xywh(&self) -> [R64; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

impl From<[R64; 4]> for BBox {
    fn from(xywh: [R64; 4]) -> Self {
        Self::from_xywh(xywh)
    }
}

impl From<BBox> for [R64; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.xywh()
    }
}
