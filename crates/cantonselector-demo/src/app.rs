//! Window, GPU surface and frame loop.

use std::rc::Rc;
use std::sync::Arc;

use cantonselector_core::{Binding, PresentationModel, RegionSnowmanDashboard};
use cantonselector_render::{RenderContext, Renderer, VelloRenderer};
use kurbo::{Point, Size};
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::{AppConfig, ConfigResult};
use crate::demo_pane::DemoPane;
use crate::event_handler::{self, EventHandler};

/// Logical size left for the dashboard once the panel is placed.
pub fn dashboard_area(physical: PhysicalSize<u32>, scale_factor: f64) -> Size {
    let width = physical.width as f64 / scale_factor - DemoPane::reserved_width() as f64;
    let height = physical.height as f64 / scale_factor;
    Size::new(width.max(0.0), height)
}

/// Runtime state that exists once the window is up.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    scene_renderer: VelloRenderer,
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    event_handler: EventHandler,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    pm: PresentationModel,
    dashboard: RegionSnowmanDashboard,
    demo_pane: DemoPane,
    _bindings: Vec<Binding>,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create the model side of the application: map, dashboard and the
    /// presentation model bound to it.
    pub fn with_config(config: AppConfig) -> ConfigResult<Self> {
        let map = Rc::new(config.load_region_map()?);
        let pm = PresentationModel::new(config.palette());
        let dashboard = RegionSnowmanDashboard::new(Rc::clone(&map));
        let bindings = pm.bind_dashboard(&dashboard);
        let demo_pane = DemoPane::new(&map);

        Ok(Self {
            config,
            pm,
            dashboard,
            demo_pane,
            _bindings: bindings,
            state: None,
            render_cx: None,
        })
    }

    /// Run the application. Fails only if the region map cannot be
    /// loaded.
    pub async fn run() -> ConfigResult<()> {
        let mut app = Self::with_config(AppConfig::load())?;

        let event_loop = EventLoop::new().expect("Failed to create event loop");
        event_loop.run_app(&mut app).expect("Event loop error");
        Ok(())
    }

    /// Finish initialization after the surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = match vello::Renderer::new(device, RendererOptions::default()) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to create Vello renderer: {:?}", e);
                return;
            }
        };

        // Vello renders to Rgba8Unorm; the surface may want another format.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let scale_factor = window.scale_factor();
        self.dashboard.resize(dashboard_area(window.inner_size(), scale_factor));

        log::info!(
            "Canton selector initialized - {}x{} @ {}x",
            surface.config.width,
            surface.config.height,
            scale_factor
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            scene_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            event_handler: EventHandler::new(scale_factor),
        });

        window.request_redraw();
    }

    fn redraw(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let egui_output = state
            .egui_ctx
            .run(egui_input, |ctx| self.demo_pane.show(ctx, &self.pm, &self.dashboard));
        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let width = state.surface.config.width;
        let height = state.surface.config.height;
        let background: peniko::Color = self.config.background_color.into();

        let ctx = RenderContext::new(&self.dashboard, Size::new(width as f64, height as f64))
            .with_scale_factor(state.window.scale_factor())
            .with_background(background)
            .with_outline(self.config.outline_color.into())
            .with_cells(self.config.show_cells);
        state.scene_renderer.build_scene(&ctx);
        let scene = state.scene_renderer.take_scene();

        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };
        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let params = RenderParams {
            base_color: background,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-bindable Rgba8Unorm target.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = state.vello_renderer.render_to_texture(
            device,
            queue,
            &scene,
            &render_texture_view,
            &params,
        ) {
            log::error!("Failed to render: {:?}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            state
                .texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            state.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            state.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static pass
            let mut render_pass = render_pass.forget_lifetime();
            state
                .egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if repaint_now {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface = match pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        )) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {:?}", e);
                event_loop.exit();
                return;
            }
        };

        self.finish_init(window, surface);
        if self.state.is_none() {
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                self.dashboard
                    .resize(dashboard_area(size, state.window.scale_factor()));
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                state.event_handler.set_scale_factor(scale_factor);
                self.dashboard
                    .resize(dashboard_area(state.window.inner_size(), scale_factor));
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input = state
                    .event_handler
                    .cursor_moved(Point::new(position.x, position.y), egui_wants_pointer);
                event_handler::apply(input, &mut self.dashboard);
                state.window.request_redraw();
            }

            WindowEvent::CursorLeft { .. } => {
                event_handler::apply(state.event_handler.cursor_left(), &mut self.dashboard);
                state.window.request_redraw();
            }

            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if let Some(input) =
                    state
                        .event_handler
                        .mouse_input(btn_state, button, egui_wants_pointer)
                {
                    event_handler::apply(input, &mut self.dashboard);
                    state.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_area_leaves_room_for_panel() {
        let area = dashboard_area(PhysicalSize::new(2960, 1520), 2.0);
        assert!((area.width - (1480.0 - DemoPane::reserved_width() as f64)).abs() < 1e-9);
        assert_eq!(area.height, 760.0);

        let tiny = dashboard_area(PhysicalSize::new(100, 100), 1.0);
        assert_eq!(tiny.width, 0.0);
    }

    #[test]
    fn test_model_side_wired_up() {
        let app = App::with_config(AppConfig::default()).unwrap();
        app.pm.is_fun.set(true);
        assert!(app.dashboard.is_fun.get());
        assert!(app.dashboard.snowman().value.get());
    }

    #[test]
    fn test_missing_asset_fails_startup() {
        let config = AppConfig {
            asset_path: Some("/nonexistent/cantons.svg".into()),
            ..AppConfig::default()
        };
        assert!(App::with_config(config).is_err());
    }
}
