//! Microphone capture: getUserMedia -> AudioContext -> AnalyserNode.

use crate::constants::FFT_SIZE;
use cake_core::rms_from_bytes;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A live microphone stream with an attached time-domain analyser.
pub struct MicInput {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
}

impl MicInput {
    /// Request the microphone (echo cancellation and noise suppression on)
    /// and wire it into an analyser. Fails when permission is denied or no
    /// device is available; the caller falls back to manual input.
    pub async fn open() -> Result<Self, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;

        let track = web::MediaTrackConstraints::new();
        track.set_echo_cancellation(&JsValue::TRUE);
        track.set_noise_suppression(&JsValue::TRUE);
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::from(track));
        constraints.set_video(&JsValue::FALSE);

        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream: web::MediaStream = JsFuture::from(promise).await?.dyn_into()?;

        let ctx = web::AudioContext::new()?;
        let source = ctx.create_media_stream_source(&stream)?;
        let analyser = ctx.create_analyser()?;
        analyser.set_fft_size(FFT_SIZE);
        source.connect_with_audio_node(&analyser)?;

        let buf = vec![0u8; analyser.fft_size() as usize];
        log::info!("[mic] stream open, sample rate {}", ctx.sample_rate());
        Ok(Self { ctx, analyser, buf })
    }

    pub fn audio_context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// One time-domain window from the analyser, reduced to normalized RMS.
    pub fn read_level(&mut self) -> f32 {
        self.analyser.get_byte_time_domain_data(&mut self.buf);
        rms_from_bytes(&self.buf)
    }
}
