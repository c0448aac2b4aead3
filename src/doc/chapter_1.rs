/*!
# Commands

Each command occupies one line. The first word selects the command.
*/

pub mod print {
    /*!
    ## `print "<text>"` `print @<name>` `print @ARGUMENTS.STRING`
    Writes a line of output. A literal runs from the first to the last
    double quote on the line, so embedded quotes are kept.
    `@ARGUMENTS.STRING` is the first argument of the current call.
    A bare `print` writes an empty line.
    ```text
    print "She said "hi""
    She said "hi"
    ```
    */
}

pub mod string {
    /*!
    ## `string <name> = "<value>"`
    Defines or replaces a variable. The value ends at the first closing
    quote and a trailing `;` inside the quotes is dropped. Curly quotes
    are accepted.
    ```text
    string city = “Montréal”
    print @city
    Montréal
    ```
    */
}

pub mod val {
    /*!
    ## `@VAL <name> = <value>;`
    Like `string` but quotes are optional. A trailing `;` and one pair of
    surrounding quotes are removed.
    ```text
    @VAL count = 3;
    print @count
    3
    ```
    */
}

pub mod max_mem {
    /*!
    ## `MAX_MEM <bytes>;`
    Sets a memory budget for variables and resets its usage to zero.
    Every definition costs 16 bytes plus the UTF-8 length of the value.
    A definition that does not fit is refused and the variable keeps its
    previous state. Without `MAX_MEM` there is no limit.
    ```text
    MAX_MEM 40;
    string a = "hello"
    string b = "world"
    MEMORY BUDGET EXCEEDED IN 3; CREATING VARIABLE 'b'
    ```
    */
}

pub mod rem {
    /*!
    ## `@REM <anything>`
    A comment.
    */
}

pub mod stdo {
    /*!
    ## `@STDO REMOVE` `@DEBUG REMOVE`
    Clear the output and the debug log respectively. Any other operand is
    ignored.
    */
}

pub mod external {
    /*!
    ## `@EXTERNAL RUN "<file.jlsh>"`
    Runs another script to completion before continuing. The path is
    relative to the directory of the running script and may not contain
    spaces. The other script shares variables and functions with this one.
    */
}

pub mod call {
    /*!
    ## `call <name>[<arg>, <arg>, ...]`
    Runs a function. Arguments are separated by commas; surrounding spaces
    and quotes are removed. The brackets may be left off. Calling a
    function that was never defined does nothing.
    */
}
