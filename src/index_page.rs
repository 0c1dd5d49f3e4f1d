/// Upload page served at `/`. Each selected PDF is converted by its own
/// request pair: a preview call for the table, a download call for the
/// workbook.
pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>PDF Table to Excel Converter</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }
  h1 { font-size: 1.5rem; }
  .hint { color: #555; }
  .picker { margin: 1.5rem 0; }
  .result { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin: 1rem 0; }
  .result h3 { margin-top: 0; word-break: break-all; }
  .error { color: #b00020; }
  .ok { color: #1b5e20; }
  table { border-collapse: collapse; width: 100%; margin: 0.75rem 0; }
  th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; font-size: 0.9rem; }
  th { background: #f5f5f5; }
  td:last-child, th:last-child { text-align: right; }
  button { padding: 0.45rem 0.9rem; border: 1px solid #1565c0; border-radius: 4px; background: #1976d2; color: #fff; cursor: pointer; }
  button:disabled { opacity: 0.6; cursor: wait; }
</style>
</head>
<body>
<h1>PDF Table to Excel Converter</h1>
<p class="hint">Upload one or more PDFs containing a &quot;Summary of costs by domain&quot;
table. The table is extracted from each file and offered as an Excel download.</p>
<div class="picker">
  <input id="files" type="file" accept="application/pdf,.pdf" multiple>
</div>
<div id="results"></div>
<script>
const input = document.getElementById('files');
const results = document.getElementById('results');

input.addEventListener('change', () => {
  results.replaceChildren();
  for (const file of input.files) {
    convert(file);
  }
});

async function convert(file) {
  const section = document.createElement('div');
  section.className = 'result';
  const title = document.createElement('h3');
  title.textContent = 'File: ' + file.name;
  section.appendChild(title);
  results.appendChild(section);

  let preview;
  try {
    const response = await fetch('/api/v1/rows', { method: 'POST', body: formFor(file) });
    const body = await response.json();
    if (!response.ok) {
      showError(section, body.message || 'conversion failed');
      return;
    }
    preview = body;
  } catch (error) {
    showError(section, String(error));
    return;
  }

  const status = document.createElement('p');
  status.className = 'ok';
  status.textContent = 'Extracted ' + preview.row_count + ' rows. Your file is ready!';
  section.appendChild(status);
  section.appendChild(tableFor(preview.rows));

  const download = document.createElement('button');
  download.textContent = 'Download ' + preview.file_name;
  download.addEventListener('click', () => downloadWorkbook(file, preview.file_name, download));
  section.appendChild(download);
}

async function downloadWorkbook(file, fileName, button) {
  button.disabled = true;
  try {
    const response = await fetch('/api/v1/xlsx', { method: 'POST', body: formFor(file) });
    if (!response.ok) {
      const body = await response.json();
      throw new Error(body.message || 'download failed');
    }
    const url = URL.createObjectURL(await response.blob());
    const anchor = document.createElement('a');
    anchor.href = url;
    anchor.download = fileName;
    anchor.click();
    URL.revokeObjectURL(url);
  } catch (error) {
    alert(String(error));
  } finally {
    button.disabled = false;
  }
}

function formFor(file) {
  const form = new FormData();
  form.append('file', file, file.name);
  return form;
}

function tableFor(rows) {
  const table = document.createElement('table');
  const head = table.createTHead().insertRow();
  for (const column of ['Domain name', 'Customer ID', 'Amount(US$)']) {
    const cell = document.createElement('th');
    cell.textContent = column;
    head.appendChild(cell);
  }
  const body = table.createTBody();
  for (const row of rows) {
    const line = body.insertRow();
    line.insertCell().textContent = row.domain;
    line.insertCell().textContent = row.customer_id;
    line.insertCell().textContent = row.amount;
  }
  return table;
}

function showError(section, message) {
  const error = document.createElement('p');
  error.className = 'error';
  error.textContent = message;
  section.appendChild(error);
}
</script>
</body>
</html>
"##;
