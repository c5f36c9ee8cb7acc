use macroquad::prelude::*;
use sparse_life::{
    Simulation, Camera, Config, Algorithm, Cell, presets,
    domain::all_rules,
    ui::{self, Dropdown},
    rendering, input, logging,
    input::PointerTracker,
};
use tracing::{info, warn};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Infinite Grid".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init_tracing();

    let config = Config::from_env().unwrap_or_else(|err| {
        warn!(%err, "invalid configuration, using defaults");
        Config::default()
    });
    info!(?config, "starting");

    let mut state = Simulation::new(&config);
    let mut camera = Camera::from_config(&config);
    let mut pointer = PointerTracker::new();

    // Start with the origin in the middle of the grid area
    camera.centre_on(Cell::new(0, 0), ui::grid_area_width(), ui::grid_area_height());

    let px = ui::panel_x();
    let rules = all_rules();
    let rule_items: Vec<String> = rules.iter().map(|r| r.name().to_string()).collect();
    let mut rule_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Rule", rule_items);
    if let Some(index) = rules.iter().position(|r| r.name() == state.rule.name()) {
        rule_dropdown.set_selected(index);
    }

    let algorithms = Algorithm::all();
    let algorithm_items: Vec<String> = algorithms.iter().map(|a| a.name().to_string()).collect();
    let mut algorithm_dropdown = Dropdown::new(px, 70.0, ui::PANEL_WIDTH, "Algorithm", algorithm_items);
    if let Some(index) = algorithms.iter().position(|&a| a == state.algorithm) {
        algorithm_dropdown.set_selected(index);
    }

    let patterns = presets::all_patterns();
    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 120.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        rule_dropdown.set_position(px, 20.0);
        algorithm_dropdown.set_position(px, 70.0);
        pattern_dropdown.set_position(px, 120.0);

        let buttons = ui::create_buttons(state.is_running());

        // Only one dropdown open at a time
        if rule_dropdown.update(mouse_pos) {
            if let Some(rule) = all_rules().into_iter().nth(rule_dropdown.selected()) {
                state.set_rule(rule);
            }
        }
        if rule_dropdown.is_open() {
            algorithm_dropdown.close();
            pattern_dropdown.close();
        }

        if algorithm_dropdown.update(mouse_pos) {
            state.set_algorithm(algorithms[algorithm_dropdown.selected()]);
        }
        if algorithm_dropdown.is_open() {
            rule_dropdown.close();
            pattern_dropdown.close();
        }

        // Selecting a pattern enters placement mode
        if pattern_dropdown.update(mouse_pos) {
            state.pending_pattern_index = Some(pattern_dropdown.selected());
        }
        if pattern_dropdown.is_open() {
            rule_dropdown.close();
            algorithm_dropdown.close();
        }

        input::handle_zoom(&mut camera, &config, mouse_pos);
        match state.pending_pattern_index {
            Some(idx) => input::handle_pattern_placement(&mut state, &camera, &patterns[idx], mouse_pos),
            None => input::handle_pointer(&mut state, &mut camera, &mut pointer, &config, mouse_pos),
        }
        state = input::process_button_clicks(state, &camera, &buttons, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        let drawn = rendering::draw_cells(state.cells(), &camera);

        // No hover readout while panning
        let hovered = (mouse_pos.0 < ui::grid_area_width() && !pointer.is_dragging())
            .then(|| input::hovered_cell(&camera, mouse_pos))
            .flatten();
        if let (Some(idx), Some(centre)) = (state.pending_pattern_index, hovered) {
            rendering::draw_pattern_preview(&patterns[idx], &camera, centre);
        }

        rendering::draw_controls(
            &state,
            &camera,
            &buttons,
            &[&rule_dropdown, &algorithm_dropdown, &pattern_dropdown],
            hovered,
            drawn,
            mouse_pos,
        );
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
