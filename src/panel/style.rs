//! Panel stylesheet

/// CSS for the panel with id `panel_id`
///
/// Default placement is vertically centered on the right edge; a restored
/// position overrides `left`/`top` inline and drops the transform.
pub fn panel_css(panel_id: &str) -> String {
    format!(
        r#"#{id} {{
  position: fixed;
  right: 20px;
  top: 50%;
  transform: translateY(-50%);
  z-index: 9999;
  width: 300px;
  border: 1px solid #ccc;
  border-radius: 5px;
  padding: 0;
  background: #fff;
  font-family: inherit;
}}
#{id} .toolbox-header {{
  height: 40px;
  background: #dae6ee;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 10px;
  font-weight: bold;
  cursor: move;
  user-select: none;
}}
#{id} .toolbox-header h2 {{
  margin: 0;
  font-size: 1.2em;
}}
#{id} .toolbox-source {{
  font-size: 0.5em;
  text-decoration: none;
  margin-left: 8px;
}}
#{id} .toolbox-content {{
  padding: 10px;
  overflow-y: auto;
  max-height: 400px;
}}
#{id} .toolbox-template-item {{
  cursor: pointer;
  margin-bottom: 2px;
  padding: 3px 5px;
  border-radius: 3px;
}}
#{id} .toolbox-template-item:hover {{
  background-color: #f0f0f0;
}}
"#,
        id = panel_id
    )
}
