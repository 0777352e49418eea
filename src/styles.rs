use yew::prelude::*;

const STYLESHEET: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #101418;
        color: #e8e8e8;
    }
    .section { display: none; padding: 6rem 2rem 4rem; max-width: 1000px; margin: 0 auto; }
    .section.active { display: block; animation: fadeIn 0.5s; }
    .section h2 { font-size: 2.2rem; margin-bottom: 1.5rem; }

    .btn {
        background: #1E90FF;
        color: white;
        border: none;
        border-radius: 6px;
        padding: 0.7rem 1.4rem;
        margin: 0.3rem;
        cursor: pointer;
        font-size: 1rem;
    }
    .btn:hover { background: #1873cc; }
    .btn.secondary { background: rgba(255, 255, 255, 0.1); }

    .service-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
    .service-card {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 12px;
        padding: 1.5rem;
        cursor: pointer;
        transition: transform 0.2s ease, border-color 0.2s ease;
    }
    .service-card:hover { transform: translateY(-4px); border-color: rgba(30, 144, 255, 0.5); }

    .animation-box {
        width: 120px;
        height: 120px;
        background: linear-gradient(135deg, #1E90FF, #7EB2FF);
        border-radius: 12px;
        margin: 1rem 0;
    }

    .flip-card { width: 240px; height: 150px; perspective: 1000px; margin: 1rem 0; }
    .flip-card-inner {
        position: relative;
        width: 100%;
        height: 100%;
        transition: transform 0.6s;
        transform-style: preserve-3d;
    }
    .flip-card.flipped .flip-card-inner { transform: rotateY(180deg); }
    .flip-card-front, .flip-card-back {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 12px;
        backface-visibility: hidden;
    }
    .flip-card-front { background: #2196F3; }
    .flip-card-back { background: #4CAF50; transform: rotateY(180deg); }

    .loader { display: flex; gap: 6px; height: 40px; align-items: flex-end; margin: 1rem 0; }
    .loader-bar {
        width: 10px;
        height: 100%;
        background: #1E90FF;
        animation: loaderBar 1s ease-in-out infinite;
    }
    .loader-bar:nth-child(2) { animation-delay: 0.1s; }
    .loader-bar:nth-child(3) { animation-delay: 0.2s; }
    .loader-bar:nth-child(4) { animation-delay: 0.3s; }
    .loader-bar:nth-child(5) { animation-delay: 0.4s; }

    .modal {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        align-items: center;
        justify-content: center;
        z-index: 1000;
    }
    .modal-content {
        position: relative;
        background: #1a1a1a;
        border-radius: 12px;
        padding: 2rem;
        max-width: 420px;
        animation: fadeIn 0.3s;
    }
    .modal-close { position: absolute; top: 0.5rem; right: 1rem; cursor: pointer; font-size: 1.5rem; }

    .quote-table { border-collapse: collapse; margin-top: 1rem; min-width: 320px; }
    .quote-table td { padding: 0.4rem 0.8rem; border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
    .quote-table td:last-child { text-align: right; }
    .quote-table tr.total td { font-weight: bold; }
    .calculator input {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.2);
        color: white;
        border-radius: 6px;
        padding: 0.5rem;
        margin: 0 1rem 0.5rem 0.5rem;
        width: 120px;
    }

    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.1); }
        100% { transform: scale(1); }
    }
    @keyframes boxAnimation {
        0% { transform: translateX(0) rotate(0deg); border-radius: 12px; }
        50% { transform: translateX(200px) rotate(180deg); border-radius: 50%; }
        100% { transform: translateX(0) rotate(360deg); border-radius: 12px; }
    }
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes loaderBar {
        0%, 100% { transform: scaleY(0.3); }
        50% { transform: scaleY(1); }
    }
"#;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <style>{STYLESHEET}</style>
    }
}
