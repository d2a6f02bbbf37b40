//! MoveNet through the `poseDetection` global of `@tensorflow-models/pose-detection`.

use crate::camera::WebCapture;
use js_sys::{Object, Promise, Reflect};
use posecam::{
    platform::{Detector, EstimateOptions},
    DetectorConfig, Error, ModelKind, Person, Result,
};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = poseDetection, js_name = createDetector, catch)]
    fn create_detector(model: &str, config: &JsValue) -> std::result::Result<Promise, JsValue>;

    type JsPoseDetector;

    #[wasm_bindgen(method, js_name = estimatePoses, catch)]
    fn estimate_poses(
        this: &JsPoseDetector,
        image: &HtmlVideoElement,
        config: &JsValue,
    ) -> std::result::Result<Promise, JsValue>;
}

pub struct MoveNet {
    inner: JsPoseDetector,
}

pub async fn load(config: &DetectorConfig) -> Result<MoveNet> {
    let options = object(&[("modelType", JsValue::from_str(config.model.model_type()))])
        .map_err(|e| Error::ModelLoad(describe(&e)))?;
    let promise = create_detector(ModelKind::FAMILY, &options)
        .map_err(|e| Error::ModelLoad(describe(&e)))?;
    let detector = JsFuture::from(promise)
        .await
        .map_err(|e| Error::ModelLoad(describe(&e)))?;
    Ok(MoveNet {
        inner: detector.unchecked_into(),
    })
}

impl Detector<WebCapture> for MoveNet {
    async fn estimate(&self, frame: &WebCapture, options: EstimateOptions) -> Result<Vec<Person>> {
        let config = object(&[("flipHorizontal", JsValue::from_bool(options.flip_horizontal))])
            .map_err(inference_error)?;
        let promise = self
            .inner
            .estimate_poses(frame.video(), &config)
            .map_err(inference_error)?;
        let poses = JsFuture::from(promise).await.map_err(inference_error)?;

        let json = js_sys::JSON::stringify(&poses).map_err(inference_error)?;
        Person::parse_list(&String::from(json))
    }
}

fn object(entries: &[(&str, JsValue)]) -> std::result::Result<JsValue, JsValue> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

fn inference_error(err: JsValue) -> Error {
    Error::Inference(describe(&err))
}

fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
