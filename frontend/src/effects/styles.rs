/// Rules the behaviours rely on that the page stylesheet does not ship:
/// the click ripple, the active nav underline and the initial page fade.
pub const RUNTIME_STYLES: &str = r#"
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: rippleAnimation 0.6s ease-out;
        pointer-events: none;
    }

    @keyframes rippleAnimation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .nav-item.active {
        color: #1464F4;
        position: relative;
    }

    .nav-item.active::after {
        content: '';
        position: absolute;
        bottom: -10px;
        left: 0;
        right: 0;
        height: 2px;
        background: #1464F4;
    }

    button {
        position: relative;
        overflow: hidden;
    }

    body {
        opacity: 0;
        transition: opacity 0.5s ease-in-out;
    }

    body.loaded {
        opacity: 1;
    }
"#;
