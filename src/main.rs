use listovki_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let app = match QuizApp::load_embedded() {
        Ok(app) => app,
        Err(err) => {
            log::error!("no se pudo cargar el banco de preguntas: {err}");
            std::process::exit(1);
        }
    };

    let title = app.config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title(&title),
        ..Default::default()
    };
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use listovki_quiz::AppAction;
    use listovki_quiz::model::parse_anchor;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let mut app = match QuizApp::load_embedded() {
            Ok(app) => app,
            Err(err) => {
                log::error!("no se pudo cargar el banco de preguntas: {err}");
                return;
            }
        };

        let Some(window) = web_sys::window() else {
            log::error!("sin window");
            return;
        };

        // #question-<id> en la URL: abrir la lista en esa pregunta
        if let Some(id) = window.location().hash().ok().as_deref().and_then(parse_anchor) {
            app.dispatch(AppAction::JumpTo(id));
        }

        let Some(canvas) = window
            .document()
            .and_then(|doc| doc.get_element_by_id("the_canvas_id"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("fallo al arrancar eframe: {err:?}");
        }
    });
}
