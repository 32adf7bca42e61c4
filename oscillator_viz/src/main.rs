//! Quantum Harmonic Oscillator Visualization Tool
//!
//! Plots oscillator wavefunctions over the potential well for the full,
//! half and superposed oscillator.
//!
//! Controls:
//! - Calculate / Enter: Redraw with the selected state
//! - Up/Down: Step through the state dropdown
//! - A: Select all states
//! - L: Toggle legend
//!
//! Environment:
//! - RUST_LOG: Log filter (e.g. `RUST_LOG=oscillator_viz=debug`)
//! - QHO_SAMPLES, QHO_MAX_STATE, QHO_ICON: See [`oscillator_viz::config`]

use common::{GraphicsContext, WindowOptions};
use oscillator_viz::{
    assets::load_window_icon,
    compose_scene,
    geometry::SceneGeometry,
    info_ui::{
        draw_control_bar, draw_footer, draw_info_sidebar, draw_plot_annotations,
        OSCILLATOR_EQUATIONS, OSCILLATOR_VARIABLES,
    },
    layout::{data_rect, plot_rects, to_viewport},
    renderer::{PlotRenderer, Viewport},
    PlotScene, StateSelection, ViewState, VizConfig,
};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    config: VizConfig,
    renderer: PlotRenderer,
    /// Selection in the dropdown, applied on Calculate
    pending: StateSelection,
    scene: PlotScene,
    show_legend: bool,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, config: VizConfig) -> Self {
        let mut renderer = PlotRenderer::new(&ctx, 65536);

        let view = ViewState::default();
        let scene = compose_scene(view, &config);
        renderer.upload(&ctx.device, &ctx.queue, &SceneGeometry::build(&scene));

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &ctx.device,
            ctx.config.format,
            None,
            1,
        );

        Self {
            ctx,
            config,
            renderer,
            pending: view.selection,
            scene,
            show_legend: false,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Recompute every panel from the pending selection
    fn calculate(&mut self) {
        let view = ViewState {
            selection: self.pending,
        };
        let started = std::time::Instant::now();
        self.scene = compose_scene(view, &self.config);
        let geometry = SceneGeometry::build(&self.scene);
        self.renderer.upload(&self.ctx.device, &self.ctx.queue, &geometry);
        log::info!(
            "plotted {} in {:.1} ms ({} vertices)",
            view.selection,
            started.elapsed().as_secs_f64() * 1e3,
            geometry.vertices.len()
        );
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build egui UI; the space left after the panels holds the plots
        let pending = &mut self.pending;
        let show_legend = &mut self.show_legend;
        let scene = &self.scene;
        let max_state = self.config.max_state;
        let mut rects = [egui::Rect::NOTHING; 3];
        let mut calculate = false;

        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            let response = draw_control_bar(ctx, pending, scene.view.selection, max_state, show_legend);
            calculate = response.calculate;
            draw_footer(ctx);
            draw_info_sidebar(ctx, OSCILLATOR_EQUATIONS, OSCILLATOR_VARIABLES, max_state);

            rects = plot_rects(ctx.available_rect());
            draw_plot_annotations(ctx, scene, &rects, *show_legend);
        });

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let surface_size = (self.ctx.config.width, self.ctx.config.height);
        let viewports: [Option<Viewport>; 3] = rects.map(|outer| {
            to_viewport(data_rect(outer), full_output.pixels_per_point, surface_size)
        });

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, &viewports);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if calculate {
            self.calculate();
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::NumpadEnter => self.calculate(),
            KeyCode::ArrowUp => self.pending = self.pending.prev(),
            KeyCode::ArrowDown => self.pending = self.pending.next(self.config.max_state),
            KeyCode::KeyA => self.pending = StateSelection::All,
            KeyCode::KeyL => self.show_legend = !self.show_legend,
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() {
    env_logger::init();

    let config = match VizConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let icon = match load_window_icon(&config.icon_path, config.icon_size) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("continuing without window icon: {}", e);
            None
        }
    };

    let options = WindowOptions {
        title: config.window_title.clone(),
        width: config.window_width,
        height: config.window_height,
        icon,
    };
    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(options)) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("cannot start graphics: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "{} samples per domain, states 0..={}",
        config.samples,
        config.max_state
    );
    let mut app = App::new(ctx, config);

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } => app.handle_key(*key, *state),
                        WindowEvent::RedrawRequested => match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::error!("render error: {:?}", e),
                        },
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    });

    if let Err(e) = result {
        log::error!("event loop error: {}", e);
        std::process::exit(1);
    }
}
