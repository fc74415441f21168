//! HTML template constants for the `HtmlWriter`.
//!
//! Keeps the stylesheet separate from the document-building logic.

/// Stylesheet inlined in the document head.
pub const STYLE: &str = r"        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.25rem; color: var(--color-text); }
        .subtitle { color: var(--color-text-muted); margin-bottom: 1.5rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 2rem 0 1rem; color: var(--color-text); }
        h3 { font-size: 1rem; font-weight: 600; margin: 1.25rem 0 0.75rem; color: var(--color-text); }
        p { margin-bottom: 1rem; }
        ul { margin: 0 0 1rem 1.5rem; }
        li { padding: 0.125rem 0; }
        .table-container { overflow-x: auto; margin-bottom: 1rem; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border-radius: 0.5rem; overflow: hidden; border: 1px solid var(--color-border); }
        th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.875rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        th.number { text-align: right; }
        td { font-size: 0.875rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        tbody tr:hover { background: var(--color-bg); }
        .charts-section { margin: 1rem 0 2rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .chart-container figcaption { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.5rem; text-align: center; }
        .chart-container svg { width: 100%; height: auto; max-width: 720px; display: block; margin: 0 auto; }
        .chart-container svg rect { transition: opacity 0.15s ease; }
        .chart-container svg rect:hover { opacity: 0.85; }
        .chart-container svg polygon:hover { opacity: 0.85; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .chart-container, table { border: 1px solid #333; break-inside: avoid; }
        }
";

/// Closing markup after the report body.
pub const FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>sales-report</strong>
        </div>
    </div>
</body>
</html>
"#;
