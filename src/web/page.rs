use crate::ai::persona::Persona;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const TITLE: &str = "LLM搭載 Webアプリ";
pub const BUSY_MESSAGE: &str = "LLMが考えています...";

/// What goes under the form after a submission.
pub enum Panel<'a> {
    Empty,
    Warning(&'a str),
    Answer(&'a str),
    Failure(&'a str),
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.6; }
textarea { width: 100%; min-height: 8rem; font: inherit; }
fieldset { border: none; padding: 0; margin: 1rem 0; }
.warning { background: #fff8e1; border-left: 4px solid #f9a825; padding: .75rem 1rem; }
.failure { background: #ffebee; border-left: 4px solid #c62828; padding: .75rem 1rem; }
.answer { white-space: pre-wrap; }
#busy { display: none; color: #555; }
"#;

const SCRIPT: &str = r#"
document.getElementById('ask').addEventListener('submit', function () {
  document.getElementById('send').disabled = true;
  document.getElementById('busy').style.display = 'block';
});
"#;

pub fn render(selected: Persona, text: &str, panel: Panel<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n", TITLE, STYLE));
    html.push_str(&format!("<h1>{}</h1>\n", TITLE));
    html.push_str(
        "<h3>アプリ概要</h3>\n\
         <p>このアプリは、入力フォームからテキストを送信すると、選択した専門家の立場からLLMが回答を生成してくれるデモです。</p>\n\
         <ul>\n\
         <li>下のラジオボタンで <strong>専門家の種類</strong> を選びます</li>\n\
         <li>テキストを入力して送信すると、専門家の立場に応じた回答が表示されます</li>\n\
         </ul>\n",
    );

    html.push_str("<form id=\"ask\" method=\"post\" action=\"/ask\">\n<fieldset>\n");
    html.push_str("<legend>専門家の種類を選択してください：</legend>\n");
    for persona in Persona::ALL {
        let checked = if persona == selected { " checked" } else { "" };
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"persona\" value=\"{}\"{}> {}</label><br>\n",
            encode_double_quoted_attribute(persona.label()),
            checked,
            encode_text(persona.display_name())
        ));
    }
    html.push_str("</fieldset>\n");
    html.push_str("<label for=\"text\">質問や相談内容を入力してください：</label>\n");
    // Parsers drop one newline right after <textarea>, so lead with our own.
    html.push_str(&format!("<textarea id=\"text\" name=\"text\">\n{}</textarea>\n", encode_text(text)));
    html.push_str("<p><button id=\"send\" type=\"submit\">送信</button></p>\n");
    html.push_str(&format!("<p id=\"busy\">{}</p>\n</form>\n", BUSY_MESSAGE));

    match panel {
        Panel::Empty => {}
        Panel::Warning(message) => {
            html.push_str(&format!("<div class=\"warning\">{}</div>\n", encode_text(message)));
        }
        Panel::Answer(answer) => {
            html.push_str("<h2>回答結果</h2>\n");
            html.push_str(&format!("<div class=\"answer\">{}</div>\n", encode_text(answer)));
        }
        Panel::Failure(message) => {
            html.push_str("<h2>エラー</h2>\n");
            html.push_str(&format!("<div class=\"failure\">{}</div>\n", encode_text(message)));
        }
    }

    html.push_str(&format!("<script>{}</script>\n</body>\n</html>\n", SCRIPT));
    html
}
