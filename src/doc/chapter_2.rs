/*!
# Functions

A function is declared with `function <name> {` and ends at the first
line that is exactly `}`. Blocks do not nest inside functions.

```text
function greet {
    print "Hello"
    print @ARGUMENTS.STRING
}
call greet[Ada, Grace]
Hello
Ada
```

Functions are collected before anything runs, so a call may appear above
the declaration. Declaring a second function with the same name replaces
the first.

Calls may nest 64 deep. A call beyond that reports
`NESTING TOO DEEP` and is skipped.
*/
