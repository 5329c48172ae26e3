use wgpu::*;

#[cfg(target_arch = "wasm32")]
use crate::error::ClientError;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

/// Bring up WebGPU on `canvas`, sized to its backing store
#[cfg(target_arch = "wasm32")]
pub async fn init_wgpu(canvas: web_sys::HtmlCanvasElement) -> Result<WgpuContext, ClientError> {
    let (width, height) = (canvas.width(), canvas.height());
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| ClientError::Surface(e.to_string()))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or(ClientError::Adapter)?;
    let (device, queue) = request_device(&adapter).await?;

    let format = pick_surface_format(&surface.get_capabilities(&adapter).formats)
        .ok_or(ClientError::NoSurfaceFormat)?;
    let config = surface_config(format, width, height);
    surface.configure(&device, &config);

    log::info!("WebGPU ready: {}x{} {:?}", width, height, format);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
    })
}

#[cfg(target_arch = "wasm32")]
async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), ClientError> {
    let descriptor = DeviceDescriptor {
        label: Some("Pong Device"),
        required_features: Features::empty(),
        required_limits: Limits::downlevel_webgl2_defaults(),
        memory_hints: MemoryHints::default(),
    };
    adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| ClientError::Device(e.to_string()))
}

/// First sRGB format, else whatever the surface lists first
pub fn pick_surface_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

pub fn surface_config(format: TextureFormat, width: u32, height: u32) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}
