/*!
# Introductory Tutorial for JLang

JLang reads a script one line at a time. Leading and trailing spaces are
ignored and blank lines are thrown away, so indent however you like.
Every line starts with a command word. Commands are case sensitive:
`print` works, `PRINT` is an unknown command.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Nothing a script does can stop it. A line with a mistake produces a
message on the debug log and the script carries on with the next line.
Start `jlang` with `--debug` to watch the log as the script runs.

<pre><code>&nbsp;> PRINT "Hello World"
&nbsp;  UNKNOWN COMMAND IN 1; 'PRINT'
</code></pre>

The number after `IN` counts non-blank lines from the top of the script,
not lines of the file.

Variables hold strings. Once defined a variable is visible everywhere
for the rest of the run, including inside functions.

<pre><code>&nbsp;> string greeting = "Hello"
&nbsp;> print @greeting
&nbsp;  Hello
</code></pre>

Continue with [Chapter 1](../__Chapter_1/index.html) for the full list
of commands.
*/
