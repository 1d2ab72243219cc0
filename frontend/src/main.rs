use yew::prelude::*;
use page::SaveTheDatePage;

mod bundle;
mod calendar;
mod countdown;
mod hero;
mod intro;
mod invite;
mod media;
mod motion;
mod page;
mod reveal;
mod sections;

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! { <SaveTheDatePage /> }
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
