use maud::{html, Markup, PreEscaped};

/// Routes advertised on the landing page, in the order they are listed.
pub const API_ROUTES: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

const LINE_BREAK: PreEscaped<&str> = PreEscaped("<br/>");

/// Plain HTML fragment listing the API routes. maud escapes the
/// placeholders, so `<start>` is sent as `&lt;start&gt;`.
pub fn home_page() -> Markup {
    html! {
        "Welcome to the Climate Analysis API!"
        (LINE_BREAK)
        (LINE_BREAK)
        "Available Routes:"
        (LINE_BREAK)
        @for (i, route) in API_ROUTES.iter().enumerate() {
            (route)
            @if i + 1 < API_ROUTES.len() {
                (LINE_BREAK)
            }
        }
    }
}
