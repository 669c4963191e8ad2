pub const GLOBAL_CSS: &str = r#"
:root {
  --page: #070b12;
  --surface: #0e1621;
  --surface-sunk: #0a1019;
  --surface-raised: #142031;
  --card: #166534;
  --line: rgba(226, 232, 240, 0.09);
  --line-strong: rgba(226, 232, 240, 0.18);
  --ink: #e2e8f0;
  --ink-soft: #b4c2d4;
  --ink-faint: #7d8aa0;
  --brand: #60a5fa;
  --brand-bright: #93c5fd;
  --danger: #f87171;
  --hover: rgba(226, 232, 240, 0.05);
  --pressed: rgba(226, 232, 240, 0.1);
  --shadow: 0 12px 36px rgba(0, 0, 0, 0.35);
  --round: 8px;
  --round-full: 999px;
  --gap-s: 8px;
  --gap-m: 12px;
  --gap-l: 16px;
  --gap-xl: 24px;
  --font: "Inter", system-ui, sans-serif;
  --text-xs: 11px;
  --text-sm: 13px;
  --text-md: 15px;
  --text-lg: 18px;
  --text-xl: 30px;
  --ease: 150ms ease;
}

*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; min-height: 100%; background: var(--page); color: var(--ink); font: var(--text-sm)/1.45 var(--font); }
a { color: var(--brand); text-decoration: none; }
a:hover { color: var(--brand-bright); }
button { font: inherit; }
button:disabled { opacity: 0.45; cursor: not-allowed; }
input { font: inherit; color: var(--ink); background: var(--surface-sunk); border: 1px solid var(--line); border-radius: var(--round); padding: var(--gap-s) var(--gap-m); outline: none; transition: border-color var(--ease); }
input:focus { border-color: var(--brand); }
input:disabled { color: var(--ink-faint); }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip-path: inset(50%); white-space: nowrap; }

.inventory-app { min-height: 100vh; display: flex; flex-direction: column; }
.panel { background: var(--surface); border: 1px solid var(--line); border-radius: var(--round); box-shadow: var(--shadow); }
.topbar { position: sticky; top: 0; z-index: 8; display: flex; align-items: center; justify-content: space-between; height: 56px; padding: 0 var(--gap-l); border-radius: 0; }
.brand-mark { display: flex; align-items: center; gap: var(--gap-s); font-weight: 600; letter-spacing: 0.03em; }
.brand-title { font-size: var(--text-lg); }
.topbar-actions { display: flex; align-items: center; gap: var(--gap-s); }
.dashboard-shell { padding: var(--gap-l); }
.dashboard { display: flex; flex-direction: column; gap: var(--gap-l); }
.page-heading { font-size: var(--text-xl); margin: 0; }

.switch { appearance: none; width: 36px; height: 20px; padding: 0; border-radius: var(--round-full); background: var(--surface-raised); position: relative; cursor: pointer; }
.switch::after { content: ""; position: absolute; top: 2px; left: 2px; width: 14px; height: 14px; border-radius: 50%; background: var(--ink); transition: transform var(--ease); }
.switch:checked { background: var(--brand); }
.switch:checked::after { transform: translateX(16px); }

.stats-grid { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: var(--gap-l); }
.stat-card { background: var(--card); color: #fff; padding: var(--gap-xl); display: flex; flex-direction: column; align-items: flex-start; gap: var(--gap-s); }
.stat-label { font-size: var(--text-lg); }
.stat-value { font-size: var(--text-xl); font-weight: 700; }

.grid-panel { padding: var(--gap-m); display: flex; flex-direction: column; gap: var(--gap-m); }
.grid-toolbar { display: flex; align-items: center; justify-content: space-between; gap: var(--gap-m); }
.filter-input { max-width: 360px; flex: 1 1 auto; }
.columns-menu, .row-menu { position: relative; }
.columns-menu > summary, .row-menu > summary { list-style: none; }
.flyout { position: absolute; right: 0; top: 100%; z-index: 10; min-width: 160px; padding: var(--gap-s); border-radius: var(--round); background: var(--surface-raised); border: 1px solid var(--line-strong); box-shadow: var(--shadow); display: flex; flex-direction: column; gap: 2px; }
.flyout-row { width: 100%; display: flex; align-items: center; gap: var(--gap-s); padding: var(--gap-s) var(--gap-m); border-radius: var(--round); border: 1px solid transparent; background: transparent; color: var(--ink); cursor: pointer; text-align: left; }
.flyout-row:hover:not(:disabled) { background: var(--hover); border-color: var(--line); }

.table-wrap { border: 1px solid var(--line); border-radius: var(--round); overflow: visible; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { padding: var(--gap-s) var(--gap-m); border-bottom: 1px solid var(--line); text-align: left; }
.data-table th { font-size: var(--text-xs); color: var(--ink-faint); text-transform: uppercase; letter-spacing: 0.04em; user-select: none; }
.data-table th.sortable { cursor: pointer; }
.data-table th.numeric, .cell.numeric { text-align: right; }
.cell.numeric { font-weight: 500; }
.cell.capitalize { text-transform: capitalize; }
.cell.lowercase { text-transform: lowercase; }
.actions-cell { width: 48px; }
.empty-row { height: 96px; text-align: center; color: var(--ink-faint); }
.skeleton { height: 16px; width: 100%; border-radius: 4px; background: var(--pressed); animation: pulse 1.4s ease-in-out infinite; }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }

.grid-footer { display: flex; align-items: center; justify-content: space-between; }
.section-subtitle { font-size: var(--text-xs); color: var(--ink-faint); }
.flex-row { display: flex; gap: var(--gap-s); align-items: center; }

.btn { border: 1px solid var(--line); background: var(--surface-sunk); color: var(--ink); padding: 8px 12px; border-radius: var(--round); font-size: var(--text-sm); cursor: pointer; transition: background var(--ease), border-color var(--ease); }
.btn:hover:not(:disabled) { background: var(--hover); border-color: var(--line-strong); }
.btn.primary { background: linear-gradient(135deg, var(--brand), var(--brand-bright)); border-color: transparent; color: #02111f; font-weight: 600; }
.btn.secondary { background: var(--surface-raised); font-weight: 600; }
.btn.ghost { background: transparent; border-color: transparent; color: var(--ink-soft); }
.btn.micro { padding: 4px 8px; font-size: var(--text-xs); border-radius: 8px; }

.modal-backdrop { position: fixed; inset: 0; z-index: 20; background: rgba(0, 0, 0, 0.55); display: flex; align-items: center; justify-content: center; }
.modal { width: min(425px, calc(100vw - 32px)); padding: var(--gap-l); display: flex; flex-direction: column; gap: var(--gap-m); }
.drawer-header { display: flex; align-items: center; justify-content: space-between; }
.pane-title { font-size: var(--text-md); font-weight: 600; }
.form-grid { display: grid; gap: var(--gap-m); padding: var(--gap-m) 0; }
.form-row { display: grid; grid-template-columns: 1fr 3fr; align-items: center; gap: var(--gap-m); }
.input-label { font-size: var(--text-xs); color: var(--ink-faint); letter-spacing: 0.04em; text-transform: uppercase; }
.form-row .input-label { text-align: right; }
.input-compact { padding: 8px 10px; }
.drawer-actions { display: flex; justify-content: flex-end; gap: var(--gap-s); }
.status-pill { display: inline-flex; align-items: center; padding: 6px 10px; border-radius: var(--round-full); font-size: var(--text-xs); border: 1px solid var(--line); }
.status-bad { border-color: rgba(240, 99, 92, 0.4); color: var(--danger); }

@media (max-width: 780px) {
  .stats-grid { grid-template-columns: 1fr; }
  .grid-toolbar { flex-wrap: wrap; }
  .dashboard-shell { padding: var(--gap-s); }
}
"#;
