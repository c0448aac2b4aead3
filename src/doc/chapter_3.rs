/*!
# Windows

`@NEW WINDOW {` opens a block describing an auxiliary window. Windows
are created while the script is being read, before its first command
runs.

```text
@NEW WINDOW {
    @Title = "Greeter"
    @Content = {
        TEXT = "Press the button"
        BUTTON = "Hello" : { print "Hello from the window" }
    }
}
```

`@Title` defaults to `Window`. `TEXT` must appear inside `@Content`.
A `BUTTON` binds one command; pressing it runs that command as if it were
written at the top level of the script. In the interactive session list
windows with `:windows` and press a button with `:press <n>`.

The whole block may also be written on one line.

```text
@NEW WINDOW { @Title = "T" @Content = { TEXT = "hi" } }
```

`@UPDATE WINDOW TEXT = "<text>"` adds a line to the most recently opened
window.
*/
