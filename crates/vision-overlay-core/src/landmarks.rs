//! Named facial landmarks projected into a name-sorted sequence.

use serde::{Deserialize, Serialize};

use crate::css::{point_relative_to_rect, RelativePosition};
use crate::{Coordinate, FormatError, Rectangle};

macro_rules! landmark_set {
    ($($variant:ident => $field:ident),+ $(,)?) => {
        /// Canonical landmark names.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LandmarkName {
            $($variant),+
        }

        impl LandmarkName {
            pub const ALL: &'static [LandmarkName] = &[$(LandmarkName::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(LandmarkName::$variant => stringify!($variant)),+
                }
            }
        }

        /// One coordinate per canonical landmark, in absolute image pixels.
        #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
        pub struct FaceLandmarks {
            $(pub $field: Coordinate),+
        }

        impl FaceLandmarks {
            pub fn get(&self, name: LandmarkName) -> Coordinate {
                match name {
                    $(LandmarkName::$variant => self.$field),+
                }
            }
        }
    };
}

landmark_set! {
    EyeLeftBottom => eye_left_bottom,
    EyeLeftInner => eye_left_inner,
    EyeLeftOuter => eye_left_outer,
    EyeLeftTop => eye_left_top,
    EyeRightBottom => eye_right_bottom,
    EyeRightInner => eye_right_inner,
    EyeRightOuter => eye_right_outer,
    EyeRightTop => eye_right_top,
    EyebrowLeftInner => eyebrow_left_inner,
    EyebrowLeftOuter => eyebrow_left_outer,
    EyebrowRightInner => eyebrow_right_inner,
    EyebrowRightOuter => eyebrow_right_outer,
    MouthLeft => mouth_left,
    MouthRight => mouth_right,
    PupilLeft => pupil_left,
    PupilRight => pupil_right,
    NoseTip => nose_tip,
    NoseRootLeft => nose_root_left,
    NoseRootRight => nose_root_right,
    NoseLeftAlarOutTip => nose_left_alar_out_tip,
    NoseLeftAlarTop => nose_left_alar_top,
    NoseRightAlarOutTip => nose_right_alar_out_tip,
    NoseRightAlarTop => nose_right_alar_top,
    UpperLipTop => upper_lip_top,
    UpperLipBottom => upper_lip_bottom,
    UnderLipTop => under_lip_top,
    UnderLipBottom => under_lip_bottom,
}

impl FaceLandmarks {
    /// `(name, coordinate)` pairs in ascending byte-wise name order.
    pub fn to_sorted(&self) -> Vec<(&'static str, Coordinate)> {
        let mut out: Vec<_> = LandmarkName::ALL
            .iter()
            .map(|&name| (name.as_str(), self.get(name)))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Every landmark positioned inside `face`, in [`to_sorted`](Self::to_sorted) order.
    pub fn relative_css(
        &self,
        face: &Rectangle,
    ) -> Result<Vec<(&'static str, RelativePosition)>, FormatError> {
        self.to_sorted()
            .into_iter()
            .map(|(name, p)| point_relative_to_rect(&p, face).map(|pos| (name, pos)))
            .collect()
    }
}
