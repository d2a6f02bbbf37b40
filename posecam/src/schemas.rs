use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// MoveNet keypoint layout (COCO order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointIndex {
    pub const COUNT: usize = 17;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Confidence in `[0, 1]`.
    #[serde(default)]
    pub score: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, score: f32) -> Self {
        Self { x, y, score }
    }

    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Strictly above `threshold`.
    pub fn is_above(&self, threshold: f32) -> bool {
        self.score > threshold
    }
}

/// One detected individual: exactly [`KeypointIndex::COUNT`] keypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPerson", into = "RawPerson")]
pub struct Person {
    pub keypoints: [Keypoint; KeypointIndex::COUNT],
    pub score: Option<f32>,
}

impl Person {
    pub fn new(keypoints: [Keypoint; KeypointIndex::COUNT]) -> Self {
        Self {
            keypoints,
            score: None,
        }
    }

    pub fn get(&self, index: KeypointIndex) -> &Keypoint {
        &self.keypoints[index as usize]
    }

    /// Decodes the JSON form of a detector result, i.e. an array of
    /// `{keypoints: [{x, y, score, ..}], score, ..}` objects.
    pub fn parse_list(json: &str) -> Result<Vec<Person>> {
        serde_json::from_str(json).map_err(|e| Error::Inference(format!("malformed poses: {e}")))
    }
}

impl TryFrom<Vec<Keypoint>> for Person {
    type Error = Error;

    fn try_from(keypoints: Vec<Keypoint>) -> Result<Self> {
        let got = keypoints.len();
        let keypoints = keypoints.try_into().map_err(|_| Error::InvalidPerson {
            expected: KeypointIndex::COUNT,
            got,
        })?;
        Ok(Self::new(keypoints))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPerson {
    keypoints: Vec<Keypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<f32>,
}

impl TryFrom<RawPerson> for Person {
    type Error = Error;

    fn try_from(raw: RawPerson) -> Result<Self> {
        let mut person = Person::try_from(raw.keypoints)?;
        person.score = raw.score;
        Ok(person)
    }
}

impl From<Person> for RawPerson {
    fn from(person: Person) -> Self {
        Self {
            keypoints: person.keypoints.to_vec(),
            score: person.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypoint_index_follows_coco_order() {
        assert_eq!(KeypointIndex::Nose as usize, 0);
        assert_eq!(KeypointIndex::LeftShoulder as usize, 5);
        assert_eq!(KeypointIndex::LeftHip as usize, 11);
        assert_eq!(KeypointIndex::RightAnkle as usize, KeypointIndex::COUNT - 1);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(Keypoint::new(0., 0., 0.51).is_above(0.5));
        assert!(!Keypoint::new(0., 0., 0.5).is_above(0.5));
    }

    #[test]
    fn person_requires_seventeen_keypoints() {
        let err = Person::try_from(vec![Keypoint::default(); 5]).unwrap_err();
        assert!(matches!(err, Error::InvalidPerson { expected: 17, got: 5 }));

        let person = Person::try_from(vec![Keypoint::new(1., 2., 0.9); 17]).unwrap();
        assert_eq!(person.get(KeypointIndex::RightAnkle).position(), Point { x: 1., y: 2. });
    }

    #[test]
    fn parses_detector_output() {
        let keypoint = r#"{"x": 12.5, "y": 40, "score": 0.8, "name": "nose"}"#;
        let keypoints = vec![keypoint; 17].join(",");
        let json = format!(r#"[{{"keypoints": [{keypoints}], "score": 0.7, "id": 1}}]"#);

        let people = Person::parse_list(&json).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].score, Some(0.7));
        assert_eq!(people[0].get(KeypointIndex::Nose), &Keypoint::new(12.5, 40., 0.8));
    }

    #[test]
    fn rejects_truncated_detector_output() {
        let json = r#"[{"keypoints": [{"x": 1, "y": 1, "score": 1}]}]"#;
        assert!(matches!(Person::parse_list(json), Err(Error::Inference(_))));
        assert!(Person::parse_list("[]").unwrap().is_empty());
    }
}
