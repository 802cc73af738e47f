use super::SimulationCore;

pub(super) fn extract(sim: &mut SimulationCore) -> usize {
    let render = &mut sim.render;
    render.circles.clear();
    render.colors.clear();
    render.circles.reserve(sim.bodies.len() * 3);
    render.colors.reserve(sim.bodies.len());

    for body in &sim.bodies {
        render.circles.extend_from_slice(&[body.position.x, body.position.y, body.radius()]);
        render.colors.push(body.color);
    }

    sim.bodies.len()
}
