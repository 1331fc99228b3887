use yew::html::BaseComponent;
use yew::ServerRenderer;

/// Renders a component to an HTML string without hydration markers.
pub async fn render<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
    C::Properties: Send,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
