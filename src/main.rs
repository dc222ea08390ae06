use yew_safety_map::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
