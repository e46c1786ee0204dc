use std::error::Error;

use umbra::*;

pub use serde_json;

/// Reads a vector from a JSON array of exactly two numbers.
pub fn json_array_to_vector(json_array: &[serde_json::Value]) -> Option<Vector2d> {
    let [x, y] = json_array else {
        return None;
    };

    Some(Vector2d::new(x.as_f64()?, y.as_f64()?))
}

fn get_vector(json: &serde_json::Value, key: &str) -> Result<Vector2d, Box<dyn Error>> {
    let array = json
        .get(key)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| format!("missing {key:?} array"))?;

    json_array_to_vector(array).ok_or_else(|| format!("{key:?} must be an array of two numbers").into())
}

fn get_float(json: &serde_json::Value, key: &str) -> Result<Float, Box<dyn Error>> {
    json.get(key)
        .ok_or_else(|| format!("missing {key:?} field"))?
        .as_f64()
        .ok_or_else(|| format!("{key:?} must be a number").into())
}

pub fn map_json_array<C: FromIterator<T>, T>(
    json: &serde_json::Value,
    map: impl FnMut(&serde_json::Value) -> Result<T, Box<dyn Error>>,
) -> Result<C, Box<dyn Error>> {
    json.as_array()
        .ok_or("json value must be an array")?
        .iter()
        .map(map)
        .collect()
}

pub trait JsonSer {
    /// Serialize `self` into a JSON object.
    fn to_json(&self) -> serde_json::Value;
}

impl JsonSer for Vector2d {
    /// `[x, y]`
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.as_slice())
    }
}

impl<T: JsonSer> JsonSer for [T] {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(Vec::from_iter(self.iter().map(T::to_json)))
    }
}

impl<T: JsonSer> JsonSer for Vec<T> {
    fn to_json(&self) -> serde_json::Value {
        self.as_slice().to_json()
    }
}

impl<T: JsonSer + ?Sized> JsonSer for &T {
    fn to_json(&self) -> serde_json::Value {
        (*self).to_json()
    }
}

impl JsonSer for Segment {
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "a": self.a().to_json(),
            "b": self.b().to_json(),
        })
    }
}

impl JsonSer for Ray {
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "origin": self.origin.to_json(),
            "direction": self.direction.to_json(),
        })
    }
}

impl JsonSer for Scene {
    /// Only user segments are written, the border is implied by the dimensions.
    ///
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "width": self.width(),
            "height": self.height(),
            "segments": self.user_segments().to_json(),
        })
    }
}

impl JsonSer for RayCastResult {
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "angle": self.ray.direction.polar_angle(),
            "direction": self.ray.direction.to_json(),
            "hit": self.hit.as_ref().map(JsonSer::to_json),
        })
    }
}

pub trait JsonDes {
    /// Deserialize from a JSON object.
    ///
    /// Returns an error if `json`'s format or values are invalid.
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;
}

impl<T: JsonDes> JsonDes for Vec<T> {
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        map_json_array(json, T::from_json)
    }
}

impl JsonDes for Segment {
    /// Deserialize a new segment from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "a": [1., 2.],
    ///     "b": [3., 4.], // must be different from "a"
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        Ok(Self::try_new(get_vector(json, "a")?, get_vector(json, "b")?)?)
    }
}

impl JsonDes for Ray {
    /// Deserialize a new ray from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "origin": [1., 2.],
    ///     "direction": [3., 4.], // must not be zero
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        Ok(Self::try_new(
            get_vector(json, "origin")?,
            get_vector(json, "direction")?,
        )?)
    }
}

impl JsonDes for Scene {
    /// Deserialize a new scene from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "width": 800.,
    ///     "height": 600.,
    ///     "segments": [ ... ], // segments, see `Segment::from_json`, may be omitted
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let mut scene = Self::new(get_float(json, "width")?, get_float(json, "height")?)?;

        if let Some(segments) = json.get("segments") {
            scene.extend_segments(Vec::<Segment>::from_json(segments)?);
        }

        Ok(scene)
    }
}

impl JsonDes for RayCastResult {
    /// Deserialize a fan cast result, the ray's origin isn't part of it and must be provided.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "angle": 0.5, // ignored, implied by "direction"
    ///     "direction": [3., 4.],
    ///     "hit": [1., 2.], // or null
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let direction = get_vector(json, "direction")?;

        let hit = match json.get("hit") {
            None | Some(serde_json::Value::Null) => None,
            Some(_) => Some(get_vector(json, "hit")?),
        };

        Ok(Self {
            ray: Ray::try_new(Vector2d::zeros(), direction)?,
            hit,
        })
    }
}

pub fn serialize_fan(origin: &Vector2d, results: &[RayCastResult]) -> serde_json::Value {
    serde_json::json!({
        "origin": origin.to_json(),
        "rays": results.to_json(),
    })
}

/// Reads the output of [`serialize_fan`] back.
pub fn deserialize_fan(
    json: &serde_json::Value,
) -> Result<(Vector2d, Vec<RayCastResult>), Box<dyn Error>> {
    let origin = get_vector(json, "origin")?;

    let results = map_json_array(json.get("rays").ok_or("rays field expected")?, |json| {
        RayCastResult::from_json(json).map(|mut result| {
            result.ray.origin = origin;
            result
        })
    })?;

    Ok((origin, results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scene_from_json() {
        let scene = Scene::from_json(&json!({
            "width": 800,
            "height": 600.0,
            "segments": [
                { "a": [400, 0], "b": [400, 600] },
                { "a": [10.5, 20.0], "b": [30.0, 40.0] },
            ],
        }))
        .unwrap();

        assert_eq!(scene.width(), 800.0);
        assert_eq!(scene.height(), 600.0);
        assert_eq!(
            scene.user_segments(),
            [
                Segment::new([400.0, 0.0], [400.0, 600.0]),
                Segment::new([10.5, 20.0], [30.0, 40.0]),
            ]
        );
    }

    #[test]
    fn segments_are_optional() {
        let scene = Scene::from_json(&json!({ "width": 10, "height": 10 })).unwrap();
        assert_eq!(scene, Scene::new(10.0, 10.0).unwrap());
    }

    #[test]
    fn scene_survives_a_round_trip() {
        let mut scene = Scene::new(640.0, 480.0).unwrap();
        scene.add_segment([1.0, 2.0], [3.0, 4.0]).unwrap();

        let json = scene.to_json();
        assert_eq!(json["segments"].as_array().map(Vec::len), Some(1));
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }

    #[test]
    fn invalid_scenes() {
        let cases = [
            json!({ "height": 10 }),
            json!({ "width": "wide", "height": 10 }),
            json!({ "width": 0, "height": 10 }),
            json!({ "width": 10, "height": 10, "segments": {} }),
            json!({ "width": 10, "height": 10, "segments": [{ "a": [1, 1] }] }),
            json!({ "width": 10, "height": 10, "segments": [{ "a": [1, 1], "b": [1, 1, 1] }] }),
            json!({ "width": 10, "height": 10, "segments": [{ "a": [1, 1], "b": [1, 1] }] }),
        ];

        for json in cases {
            assert!(Scene::from_json(&json).is_err(), "{json} should be rejected");
        }
    }

    #[test]
    fn ray_with_zero_direction_is_rejected() {
        let json = json!({ "origin": [0, 0], "direction": [0, 0] });
        let err = Ray::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), GeometryError::ZeroDirection.to_string());

        let ray = Ray::from_json(&json!({ "origin": [0, 0], "direction": [0, 2] })).unwrap();
        assert_eq!(ray, Ray::new([0.0, 0.0], [0.0, 2.0]));
    }

    #[test]
    fn fan_output() {
        let scene = Scene::new(800.0, 800.0).unwrap();
        let origin = Vector2d::new(10.0, 10.0);
        let results = scene.cast_fan(origin, 4, &CastCtx::EXACT).unwrap();

        let json = serialize_fan(&origin, &results);

        assert_eq!(json["origin"], json!([10.0, 10.0]));
        assert_eq!(json["rays"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["rays"][0]["angle"], json!(0.0));
        assert_eq!(json["rays"][0]["hit"], json!([800.0, 10.0]));

        let (parsed_origin, parsed) = deserialize_fan(&json).unwrap();
        assert_eq!(parsed_origin, origin);
        assert_eq!(parsed, results);
    }

    #[test]
    fn missing_hit_is_null() {
        let result = RayCastResult {
            ray: Ray::new([1.0, 1.0], [1.0, 0.0]),
            hit: None,
        };
        assert_eq!(result.to_json()["hit"], serde_json::Value::Null);
    }
}
